//! Caller-materialized source text
//!
//! The pipeline never performs I/O. A file-discovery collaborator reads
//! whatever it wants to expose and hands the core a [`SourceSet`], an
//! ordered `path -> text` mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Ordered collection of `(path, raw text)` pairs.
///
/// Backed by a `BTreeMap` so iteration order is deterministic and
/// repeated pipeline runs over the same inputs produce structurally
/// identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceSet(BTreeMap<String, String>);

impl SourceSet {
    /// Creates an empty source set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Adds or replaces the text for a path.
    pub fn insert(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.0.insert(path.into(), text.into());
    }

    /// Returns the text for a path, if present.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    /// Returns true when the path is present.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    /// Iterates over `(path, text)` pairs in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(path, text)| (path.as_str(), text.as_str()))
    }

    /// Number of sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the set holds no sources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for SourceSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Returns the parent directory segment of a `/`-separated path.
///
/// `envs/dev/main.tf` yields `dev`; a bare filename has no parent
/// segment and yields `None`.
#[must_use]
pub fn parent_segment(path: &str) -> Option<&str> {
    path.rsplit('/').nth(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_iteration_is_path_ordered() {
        let mut sources = SourceSet::new();
        sources.insert("envs/prod/main.tf", "b");
        sources.insert("envs/dev/main.tf", "a");

        let paths: Vec<&str> = sources.iter().map(|(path, _)| path).collect();
        assert_eq!(paths, vec!["envs/dev/main.tf", "envs/prod/main.tf"]);
    }

    #[test]
    fn test_get_and_contains() {
        let mut sources = SourceSet::new();
        sources.insert("envs/dev/main.tf", "module \"net\" {}");

        assert!(sources.contains("envs/dev/main.tf"));
        assert_eq!(sources.get("envs/dev/main.tf"), Some("module \"net\" {}"));
        assert_eq!(sources.get("envs/dev/variables.tf"), None);
    }

    #[test]
    fn test_parent_segment() {
        assert_eq!(parent_segment("envs/dev/main.tf"), Some("dev"));
        assert_eq!(parent_segment("modules/vpc/variables.tf"), Some("vpc"));
        assert_eq!(parent_segment("main.tf"), None);
    }
}
