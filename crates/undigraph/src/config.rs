//! Traversal configuration.

use serde::{Deserialize, Serialize};

/// Order in which [`traverse`](crate::graph::algorithms::traverse) visits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Level by level from the start node (FIFO frontier)
    #[default]
    BreadthFirst,
    /// Follow the smallest unvisited neighbor as deep as possible (explicit stack)
    DepthFirst,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::BreadthFirst => write!(f, "breadth-first"),
            Strategy::DepthFirst => write!(f, "depth-first"),
        }
    }
}

/// Configuration for a single traversal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Visit strategy
    #[serde(default)]
    pub strategy: Strategy,

    /// Maximum edge distance from the start node (None = whole component).
    /// Nodes beyond this depth are never emitted.
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl TraversalConfig {
    /// Unlimited breadth-first traversal (the default).
    pub fn breadth_first() -> Self {
        Self::default()
    }

    /// Unlimited depth-first traversal.
    pub fn depth_first() -> Self {
        Self {
            strategy: Strategy::DepthFirst,
            ..Default::default()
        }
    }

    /// Limit the traversal to nodes within `depth` edges of the start.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}
