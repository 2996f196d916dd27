//! Environment metadata loader

use tflens_domain::{
    Block, EnvironmentMetadata, LoadIssue, ModuleInstance, SourceSet, parent_segment,
};

use super::LoadConfig;
use crate::terraform::{derive_variable, extract_blocks, parse_attributes};

/// Environments built from a source set, plus every issue encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedEnvironments {
    /// One entry per module-declaration file, in path order.
    pub environments: Vec<EnvironmentMetadata>,

    /// Collected issues. Partial results above are still usable.
    pub issues: Vec<LoadIssue>,
}

/// Builds per-environment metadata from module-declaration sources and
/// their paired variable-declaration sources.
///
/// A source participates when its path ends with
/// `config.module_file_name`; the paired variables file is looked up on
/// the same path with `config.variables_file_name` substituted. An
/// absent pair yields an empty variable list and an info-severity
/// issue, never a failure.
#[must_use]
pub fn load_environments(sources: &SourceSet, config: &LoadConfig) -> LoadedEnvironments {
    let mut environments = Vec::new();
    let mut issues = Vec::new();

    for (path, text) in sources.iter() {
        let Some(prefix) = module_file_prefix(path, &config.module_file_name) else {
            continue;
        };
        let id = parent_segment(path).unwrap_or(path).to_string();

        let scan = extract_blocks("module", text);
        tracing::debug!(path, modules = scan.blocks.len(), "scanned module declarations");
        for error in scan.errors {
            tracing::warn!(path, %error, "skipping malformed block");
            issues.push(LoadIssue::scan(path, error));
        }
        let modules = scan.blocks.iter().map(module_instance).collect();

        let variables_path = format!("{prefix}{}", config.variables_file_name);
        let variables = match sources.get(&variables_path) {
            Some(variables_text) => {
                let scan = extract_blocks("variable", variables_text);
                for error in scan.errors {
                    tracing::warn!(path = variables_path.as_str(), %error, "skipping malformed block");
                    issues.push(LoadIssue::scan(variables_path.clone(), error));
                }
                scan.blocks.iter().map(derive_variable).collect()
            }
            None => {
                issues.push(LoadIssue::missing_variables(path, variables_path));
                Vec::new()
            }
        };

        environments.push(EnvironmentMetadata {
            id,
            path: path.to_string(),
            modules,
            variables,
        });
    }

    LoadedEnvironments {
        environments,
        issues,
    }
}

/// Returns the path prefix before the module filename when the path
/// refers to a module-declaration file, either bare or under a
/// directory.
fn module_file_prefix<'a>(path: &'a str, module_file_name: &str) -> Option<&'a str> {
    let prefix = path.strip_suffix(module_file_name)?;
    if prefix.is_empty() || prefix.ends_with('/') {
        Some(prefix)
    } else {
        None
    }
}

fn module_instance(block: &Block) -> ModuleInstance {
    let attributes = parse_attributes(&block.body);
    let source_ref = attributes.first_unquoted("source");
    ModuleInstance {
        name: block.name.clone(),
        source_ref,
        attributes,
        raw_body: block.body.clone(),
    }
}
