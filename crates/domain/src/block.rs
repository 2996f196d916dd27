//! Named configuration blocks

use serde::{Deserialize, Serialize};

/// A named, brace-delimited unit of configuration text, such as a
/// `module "net" { ... }` or `variable "region" { ... }` declaration.
///
/// The body is the exact interior text between the matching braces,
/// trimmed of leading and trailing whitespace but otherwise untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Block kind as it appears in source (`module`, `variable`, ...).
    pub kind: String,

    /// The quoted name from the block header.
    pub name: String,

    /// Interior text between the braces.
    pub body: String,
}

impl Block {
    /// Creates a new block.
    #[must_use]
    pub fn new(kind: impl Into<String>, name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_block_construction() {
        let block = Block::new("module", "net", "source = \"../../modules/vpc\"");
        assert_eq!(block.kind, "module");
        assert_eq!(block.name, "net");
        assert_eq!(block.body, "source = \"../../modules/vpc\"");
    }
}
