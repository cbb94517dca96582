//! Report rendering
//!
//! Both renderers only read a finished tree. A node is listed when its own change
//! passes the filter or when one of its descendants does, so the path down to every
//! reported change stays visible.
//!
//! - `change_filter`: which change kinds to list
//! - `text`: coloured terminal tree
//! - `html`: standalone HTML page with nested lists

pub mod change_filter;
pub mod html;
pub mod text;
