//! Command implementations
//!
//! Commands are methods on `Comparison`, the session holding the output writer and
//! the options parsed from the command line.
//!
//! - `compare`: build and report the diff tree of every consecutive snapshot pair

pub mod compare;
