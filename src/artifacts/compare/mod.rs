//! Sequence alignment
//!
//! - `change`: the aligned pair type and its classification
//! - `ordered`: merge alignment for sequences sorted under the same key
//! - `unordered`: greedy identity-driven alignment for unsorted sequences

pub mod change;
pub mod ordered;
pub mod unordered;
