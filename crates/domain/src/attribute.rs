//! Block attributes as an ordered multimap
//!
//! Attribute keys are not required to be unique within a block, so the
//! collection keeps list semantics: every occurrence is preserved in
//! source order, and call sites choose between the first occurrence and
//! all occurrences explicitly.

use serde::{Deserialize, Serialize};

/// A single `key = value` declaration inside a block body.
///
/// The value is kept raw: quotes are retained and multi-line values
/// (arrays, maps, heredocs) are newline-joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute key as written in source.
    pub key: String,

    /// Raw attribute value, possibly spanning multiple source lines.
    pub value: String,
}

impl Attribute {
    /// Creates a new attribute.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ordered multimap of attributes parsed from one block body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Vec<Attribute>);

impl Attributes {
    /// Creates an empty attribute list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends an attribute, preserving insertion order.
    pub fn push(&mut self, attribute: Attribute) {
        self.0.push(attribute);
    }

    /// Returns the value of the first attribute with the given key.
    ///
    /// Duplicate keys are legal; the first occurrence is authoritative
    /// for single-value lookups.
    #[must_use]
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|attribute| attribute.key == key)
            .map(|attribute| attribute.value.as_str())
    }

    /// Returns the first value for the key with one surrounding quote
    /// pair stripped.
    #[must_use]
    pub fn first_unquoted(&self, key: &str) -> Option<String> {
        self.first(key)
            .map(|value| strip_surrounding_quotes(value).to_string())
    }

    /// Returns every value declared for the key, in source order.
    pub fn all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> {
        self.0
            .iter()
            .filter(move |attribute| attribute.key == key)
            .map(|attribute| attribute.value.as_str())
    }

    /// Iterates over all attributes in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.0.iter()
    }

    /// Number of attributes, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no attribute was parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Attribute> for Attributes {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Strips one leading and one trailing double quote, each independently
/// and only at the outermost position. No general unescaping is applied.
#[must_use]
pub fn strip_surrounding_quotes(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}
