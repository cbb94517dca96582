//! Built-in node expanders
//!
//! Register order matters: the builder hands each node to the first expander that
//! accepts it, so specialized file expanders go before `ContentExpander`.
//!
//! - `directory`: lists and aligns directory entries
//! - `structural`: aligns the structural elements of recognized source files
//! - `content`: byte comparison for any remaining file pair

pub mod content;
pub mod directory;
pub mod structural;
