//! JSON rendering for resolved environment views
//!
//! The hand-off format to the presentation layer: deterministic pretty
//! JSON so successive renders of unchanged input diff cleanly.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tflens_domain::ResolvedEnvironment;

/// Error type for rendering operations.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializes a value to deterministic JSON: 2-space indentation and a
/// trailing newline.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_stable_json<T: Serialize>(value: &T) -> Result<String, RenderError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let mut json = String::from_utf8(buffer)?;
    json.push('\n');
    Ok(json)
}

/// Renders resolved environments as deterministic JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_environments(environments: &[ResolvedEnvironment]) -> Result<String, RenderError> {
    to_stable_json(&environments)
}
