//! Export module for visualizing graphs in external tools.
//!
//! Supports two formats:
//! - **DOT**: Graphviz visualization, optionally highlighting a path
//! - **JSON**: D3.js and web-based tools
//!
//! Exports are rendered to strings; writing them anywhere is up to the caller.

pub mod dot;
pub mod json;

pub use dot::{export_dot, export_dot_styled, DotOptions};
pub use json::export_json;
