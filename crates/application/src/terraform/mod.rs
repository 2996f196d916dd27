//! Structural extraction for Terraform-style configuration text
//!
//! Three layers, each pure over its input: block extraction with
//! string-aware brace tracking, line-oriented attribute parsing, and
//! variable derivation shared by the environment and catalog loaders.
//! Nothing here validates the configuration language itself; the text
//! is treated structurally only.

mod attributes;
mod blocks;
mod variables;

pub use attributes::parse_attributes;
pub use blocks::{BlockScan, extract_blocks};
pub use variables::derive_variable;
