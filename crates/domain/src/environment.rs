//! Per-environment metadata

use serde::{Deserialize, Serialize};

use crate::modules::ModuleInstance;
use crate::variable::VariableSpec;

/// Everything extracted for one deployable environment: the module
/// instances it declares and its own input variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentMetadata {
    /// Environment identifier, derived from the parent directory segment
    /// of the module-declaration source path.
    pub id: String,

    /// Path of the module-declaration source.
    pub path: String,

    /// Module instances declared by the environment, in source order.
    pub modules: Vec<ModuleInstance>,

    /// Input variables declared in the paired variables file. Empty when
    /// no paired file exists.
    pub variables: Vec<VariableSpec>,
}
