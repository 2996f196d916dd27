//! Module instances and catalog definitions

use serde::{Deserialize, Serialize};

use crate::attribute::Attributes;
use crate::variable::VariableSpec;

/// A concrete usage of a reusable module inside one environment,
/// produced from a `module` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInstance {
    /// Instance name from the block header.
    pub name: String,

    /// The `source` attribute value with its surrounding quotes
    /// stripped, when the block declares one.
    pub source_ref: Option<String>,

    /// All attributes of the block, in source order.
    pub attributes: Attributes,

    /// The untouched block body, for raw display.
    pub raw_body: String,
}

/// A reusable module's declared inputs, held in the module catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDefinition {
    /// Catalog identifier, derived from the parent directory segment of
    /// the module-library source path.
    pub id: String,

    /// Source path the definition was loaded from.
    pub path: String,

    /// Declared input variables.
    pub variables: Vec<VariableSpec>,
}
