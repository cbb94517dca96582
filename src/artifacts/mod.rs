//! Diff engine data structures and algorithms
//!
//! - `compare`: change records and the ordered and unordered alignments
//! - `core`: shared terminal output utilities (pager wrapper)
//! - `diff_tree`: the diff tree, the expander interface and the builder
//! - `expanders`: directory, structural and content expanders
//! - `report`: change filter and the text and HTML renderers
//! - `structure`: structural content model and language extractors

pub mod compare;
pub mod core;
pub mod diff_tree;
pub mod expanders;
pub mod report;
pub mod structure;
