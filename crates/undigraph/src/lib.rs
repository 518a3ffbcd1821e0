//! # undigraph
//!
//! Deterministic traversal and analysis of undirected, unweighted graphs.
//!
//! ## Core Principles
//!
//! - **Deterministic**: neighbors are always visited in ascending order, so every
//!   traversal, path and component listing is reproducible
//! - **Immutable graphs**: a [`Graph`] never changes after construction; queries
//!   borrow it and return fresh values
//! - **Explicit errors**: querying from a node the graph never contained is a
//!   [`GraphError::NodeNotFound`]; an unreachable target is just `None`
//! - **Iterative**: no algorithm recurses, so deep graphs cannot overflow the stack
//!
//! ## Architecture
//!
//! ```text
//! Export (DOT, JSON)
//!     ↓
//! PathFinder / ComponentFinder / CycleDetector
//!     ↓
//! Traversal (breadth-first walk + Visitor)
//!     ↓
//! Graph (built by GraphBuilder)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use undigraph::build_graph;
//!
//! let graph = build_graph([("A", "B"), ("B", "C"), ("C", "D"), ("A", "D")]);
//!
//! assert_eq!(graph.bfs(&"A").unwrap(), vec!["A", "B", "D", "C"]);
//! assert_eq!(graph.shortest_path(&"A", &"D").unwrap(), Some(vec!["A", "D"]));
//! assert_eq!(graph.connected_components().len(), 1);
//! assert!(graph.has_cycle());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod export;
pub mod graph;

// Re-export main types
pub use config::{Strategy, TraversalConfig};
pub use error::{GraphError, Result};
pub use graph::{build_graph, Graph, GraphBuilder, NodeId};
