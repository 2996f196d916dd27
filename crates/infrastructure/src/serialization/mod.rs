//! Serialization helpers

mod json;

pub use json::{RenderError, render_environments, to_stable_json};
