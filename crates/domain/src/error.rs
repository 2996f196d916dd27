//! Scan error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recoverable, per-block failures raised by the block scanner.
///
/// Both conditions would otherwise leave the scanner consuming the rest
/// of the input as a corrupted block body; they are explicit so batch
/// loaders can skip the block and report it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ScanError {
    /// A block header was found but its closing brace is never reached
    /// before the input ends.
    #[error("block `{kind} \"{name}\"` is never closed before the input ends")]
    UnterminatedBlock {
        /// Block kind from the header.
        kind: String,
        /// Block name from the header.
        name: String,
    },

    /// The input ends inside a double-quoted string literal, which would
    /// desynchronize brace-depth tracking.
    #[error("unterminated string literal inside block `{kind} \"{name}\"`")]
    UnterminatedString {
        /// Block kind from the header.
        kind: String,
        /// Block name from the header.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_names_the_block() {
        let error = ScanError::UnterminatedBlock {
            kind: "module".to_string(),
            name: "net".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "block `module \"net\"` is never closed before the input ends"
        );
    }
}
