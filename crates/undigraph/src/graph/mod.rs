//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Graph`]: the immutable undirected adjacency representation
//! - [`GraphBuilder`] and [`build_graph`]: construction from edge lists
//! - [`algorithms`]: traversal, paths, components and cycles

mod builder;
mod types;
pub mod algorithms;

pub use builder::{build_graph, GraphBuilder};
pub use types::{Graph, NodeId};
