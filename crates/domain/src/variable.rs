//! Input variable descriptions

use serde::{Deserialize, Serialize};

/// A declared input variable, shared by environment metadata and module
/// catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableSpec {
    /// Variable name from the block header.
    pub name: String,

    /// Human-readable description, outer quotes stripped.
    pub description: Option<String>,

    /// Raw type expression, e.g. `string` or `list(string)`.
    pub var_type: Option<String>,

    /// Raw default value as written in source, quotes retained.
    pub default_value: Option<String>,

    /// Whether a caller must supply a value.
    pub required: bool,
}

impl VariableSpec {
    /// Creates a variable description.
    ///
    /// `required` is derived from the presence of a default value and is
    /// never set independently: a variable with any default, including an
    /// empty string, is optional.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        var_type: Option<String>,
        default_value: Option<String>,
    ) -> Self {
        let required = default_value.is_none();
        Self {
            name: name.into(),
            description,
            var_type,
            default_value,
            required,
        }
    }
}
