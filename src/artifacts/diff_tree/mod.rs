//! Diff tree model and construction
//!
//! - `node`: the mutable tree node and its kinds
//! - `expander`: the plugin interface the builder dispatches to
//! - `builder`: recursive expansion with bottom-up change promotion

pub mod builder;
pub mod expander;
pub mod node;
