//! Filesystem and session areas
//!
//! - `snapshot`: read-only access to one snapshot folder (listing, fingerprints)
//! - `comparison`: output writer, options and the configured diff tree builder

pub mod comparison;
pub mod snapshot;
