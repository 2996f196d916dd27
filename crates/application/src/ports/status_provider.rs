//! Status provider port

use tflens_domain::ModuleStatus;

/// Port for obtaining a module's runtime status.
///
/// The resolver is written against this abstraction so the
/// deterministic mock and a live polling implementation are
/// interchangeable without touching the resolution contract.
pub trait StatusProvider: Send + Sync {
    /// Returns the current status for the module with the given id.
    fn status(&self, module_id: &str) -> ModuleStatus;
}
