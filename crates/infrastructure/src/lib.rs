//! tflens Infrastructure - Adapters
//!
//! Concrete implementations of the ports defined in the application
//! layer, plus serialization helpers for handing resolved output to a
//! presentation layer.

pub mod adapters;
pub mod serialization;

pub use adapters::MockStatusProvider;
pub use serialization::{RenderError, render_environments, to_stable_json};
