//! Hierarchical diff of directory snapshots
//!
//! Two snapshot folders are compared into a tree of `DiffTreeNode`s: directories and
//! files, and for recognized source files their structural elements, each classified
//! as unmodified, modified, added or removed.
//!
//! - `areas`: filesystem access and the comparison session
//! - `artifacts`: alignments, the diff tree and its expanders, reports
//! - `commands`: the snapshot chain driver

pub mod areas;
pub mod artifacts;
pub mod commands;
