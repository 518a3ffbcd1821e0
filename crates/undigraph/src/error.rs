//! Error types for undigraph operations.
//!
//! All fallible operations return [`Result<T>`]. An unreachable target is not
//! an error: path queries report it as `Ok(None)`.

use std::fmt::Debug;
use thiserror::Error;

/// Result type alias for undigraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for all graph operations.
///
/// Node identifiers are stored pre-rendered with their `Debug` form so the
/// error stays independent of the graph's node type.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A query started from a node the graph does not contain
    #[error("Node not found: {node}")]
    NodeNotFound {
        /// The missing node
        node: String,
    },

    /// An adjacency mapping lists a neighbor that does not list the node back
    #[error("Asymmetric adjacency: {node} lists {neighbor}, but {neighbor} does not list {node}")]
    AsymmetricAdjacency {
        /// Node whose neighbor set holds the one-way entry
        node: String,
        /// The neighbor missing the reverse entry
        neighbor: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GraphError {
    /// Create a [`GraphError::NodeNotFound`] for the given node.
    pub fn node_not_found<N: Debug + ?Sized>(node: &N) -> Self {
        Self::NodeNotFound {
            node: format!("{node:?}"),
        }
    }

    /// Create a [`GraphError::AsymmetricAdjacency`] for a one-way entry.
    pub fn asymmetric<N: Debug + ?Sized>(node: &N, neighbor: &N) -> Self {
        Self::AsymmetricAdjacency {
            node: format!("{node:?}"),
            neighbor: format!("{neighbor:?}"),
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}
