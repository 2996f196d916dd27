//! Variable derivation from `variable` blocks

use tflens_domain::{Block, VariableSpec, strip_surrounding_quotes};

use super::attributes::parse_attributes;

/// Derives a [`VariableSpec`] from a `variable` block.
///
/// The description has one surrounding quote pair stripped; the type
/// expression and default value are kept raw. A variable is required
/// exactly when it declares no `default` attribute.
#[must_use]
pub fn derive_variable(block: &Block) -> VariableSpec {
    let attributes = parse_attributes(&block.body);

    let description = attributes
        .first("description")
        .map(|value| strip_surrounding_quotes(value).to_string());
    let var_type = attributes.first("type").map(ToString::to_string);
    let default_value = attributes.first("default").map(ToString::to_string);

    VariableSpec::new(block.name.clone(), description, var_type, default_value)
}
