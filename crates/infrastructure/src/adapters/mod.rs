//! Port adapters

mod mock_status;

pub use mock_status::MockStatusProvider;
