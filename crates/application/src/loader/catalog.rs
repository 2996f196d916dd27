//! Module catalog loader

use tflens_domain::{LoadIssue, ModuleDefinition, SourceSet, parent_segment};

use crate::terraform::{derive_variable, extract_blocks};

/// Catalog definitions built from a source set, plus every issue
/// encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedCatalog {
    /// One definition per module-library source, in path order.
    pub definitions: Vec<ModuleDefinition>,

    /// Collected issues. Partial results above are still usable.
    pub issues: Vec<LoadIssue>,
}

/// Builds the catalog of reusable module definitions from
/// variable-declaration sources, one per module-library entry.
///
/// Shares block extraction and variable derivation with the environment
/// loader and nothing else; the two loaders' inputs are unrelated.
#[must_use]
pub fn load_catalog(sources: &SourceSet) -> LoadedCatalog {
    let mut definitions = Vec::new();
    let mut issues = Vec::new();

    for (path, text) in sources.iter() {
        let id = parent_segment(path).unwrap_or(path).to_string();

        let scan = extract_blocks("variable", text);
        tracing::debug!(path, variables = scan.blocks.len(), "scanned module library");
        for error in scan.errors {
            tracing::warn!(path, %error, "skipping malformed block");
            issues.push(LoadIssue::scan(path, error));
        }

        definitions.push(ModuleDefinition {
            id,
            path: path.to_string(),
            variables: scan.blocks.iter().map(derive_variable).collect(),
        });
    }

    LoadedCatalog {
        definitions,
        issues,
    }
}
