//! Resolved environment views
//!
//! The join between declared module instances, catalog definitions and
//! provider-supplied status, shaped for direct consumption by a
//! presentation layer.

use serde::{Deserialize, Serialize};

use crate::modules::{ModuleDefinition, ModuleInstance};
use crate::status::ModuleStatus;
use crate::variable::VariableSpec;

/// A module instance joined with its catalog definition and status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedModule {
    /// The declared instance, unchanged.
    #[serde(flatten)]
    pub instance: ModuleInstance,

    /// Identifier used for the catalog lookup and the status query.
    pub module_id: String,

    /// Matching catalog definition. Unset when the id matches no catalog
    /// entry; the instance is still returned and rendered as having no
    /// declared inputs.
    pub definition: Option<ModuleDefinition>,

    /// Runtime status from the injected provider.
    pub status: ModuleStatus,
}

/// Environment metadata with every module instance resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedEnvironment {
    /// Environment identifier.
    pub id: String,

    /// Path of the module-declaration source.
    pub path: String,

    /// Resolved module instances, in source order.
    pub modules: Vec<ResolvedModule>,

    /// The environment's own input variables.
    pub variables: Vec<VariableSpec>,
}

/// Derives the identifier used to join a module instance against the
/// catalog.
///
/// The fallback order is fixed: the last non-empty `/`-segment of the
/// source reference when one is present, otherwise the instance name.
///
/// # Examples
///
/// ```
/// use tflens_domain::derive_module_id;
///
/// assert_eq!(derive_module_id(Some("../../modules/vpc"), "net"), "vpc");
/// assert_eq!(derive_module_id(None, "net"), "net");
/// ```
#[must_use]
pub fn derive_module_id(source_ref: Option<&str>, name: &str) -> String {
    source_ref
        .and_then(|source| source.rsplit('/').find(|segment| !segment.is_empty()))
        .unwrap_or(name)
        .to_string()
}
