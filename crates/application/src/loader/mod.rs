//! Batch loaders over caller-supplied sources
//!
//! Both loaders walk a [`tflens_domain::SourceSet`], drive the
//! extraction pipeline per file, and return partial results together
//! with the issues collected on the way. A bad file or block never
//! aborts the batch.

mod catalog;
mod environments;

pub use catalog::{LoadedCatalog, load_catalog};
pub use environments::{LoadedEnvironments, load_environments};

/// Loader configuration options.
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Filename of an environment's module-declaration file
    /// (default: `main.tf`).
    pub module_file_name: String,

    /// Filename of the paired variable-declaration file, substituted for
    /// the module filename on the same path (default: `variables.tf`).
    pub variables_file_name: String,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            module_file_name: "main.tf".to_string(),
            variables_file_name: "variables.tf".to_string(),
        }
    }
}
