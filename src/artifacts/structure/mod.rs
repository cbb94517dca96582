//! Structural content model
//!
//! Extractors turn the text of a recognized file type into a forest of `CodeNode`s.
//! The diff engine only relies on the generic shape of that forest (label, kind, source,
//! identifiers and children), never on the language it came from.
//!
//! - `code_node`: the generic element type and the identity predicate
//! - `rust_extractor`: extractor for Rust sources built on `syn`

pub mod code_node;
pub mod rust_extractor;

use crate::artifacts::structure::code_node::CodeNode;

/// Language specific parser producing a structural forest from file text
pub trait ContentExtractor: Send + Sync {
    /// Name reported in error markers when extraction fails
    fn name(&self) -> &str;

    /// File extension (without the dot) this extractor understands
    fn extension(&self) -> &str;

    fn extract(&self, text: &str) -> anyhow::Result<Vec<CodeNode>>;
}
