//! Construction of [`Graph`] values from edge lists.

use super::types::{Graph, NodeId};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// Incremental builder for an undirected [`Graph`].
///
/// Edges are accumulated with symmetric closure, so insertion order and
/// repeated edges never change the result.
///
/// # Example
///
/// ```
/// use undigraph::GraphBuilder;
///
/// let graph = GraphBuilder::new()
///     .with_edge("A", "B")
///     .with_edge("B", "A")
///     .with_node("C")
///     .build();
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder<N> {
    adjacency: BTreeMap<N, BTreeSet<N>>,
    edges_seen: usize,
}

impl<N> Default for GraphBuilder<N> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
            edges_seen: 0,
        }
    }
}

impl<N: NodeId> GraphBuilder<N> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an undirected edge between `a` and `b`, creating either node if needed.
    ///
    /// `a == b` records a self-loop.
    pub fn add_edge(&mut self, a: N, b: N) -> &mut Self {
        self.edges_seen += 1;
        self.adjacency.entry(a.clone()).or_default().insert(b.clone());
        self.adjacency.entry(b).or_default().insert(a);
        self
    }

    /// Add a node without any edges. No-op if the node already exists.
    pub fn add_node(&mut self, node: N) -> &mut Self {
        self.adjacency.entry(node).or_default();
        self
    }

    /// Chaining form of [`add_edge`](Self::add_edge).
    pub fn with_edge(mut self, a: N, b: N) -> Self {
        self.add_edge(a, b);
        self
    }

    /// Chaining form of [`add_node`](Self::add_node).
    pub fn with_node(mut self, node: N) -> Self {
        self.add_node(node);
        self
    }

    /// Finish construction.
    pub fn build(self) -> Graph<N> {
        let graph = Graph::from_symmetric(self.adjacency);
        debug!(
            "Built graph: {} nodes, {} edges from {} input pairs",
            graph.node_count(),
            graph.edge_count(),
            self.edges_seen
        );
        graph
    }
}

impl<N: NodeId> Extend<(N, N)> for GraphBuilder<N> {
    fn extend<I: IntoIterator<Item = (N, N)>>(&mut self, edges: I) {
        for (a, b) in edges {
            self.add_edge(a, b);
        }
    }
}

impl<N: NodeId> FromIterator<(N, N)> for Graph<N> {
    fn from_iter<I: IntoIterator<Item = (N, N)>>(edges: I) -> Self {
        let mut builder = GraphBuilder::new();
        builder.extend(edges);
        builder.build()
    }
}

/// Build an undirected graph from a list of edges.
///
/// Each pair `(a, b)` connects `a` and `b` in both directions. The result is
/// independent of edge order and duplicates.
///
/// # Example
///
/// ```
/// use undigraph::build_graph;
///
/// let graph = build_graph([("A", "B"), ("B", "C")]);
/// assert!(graph.neighbors(&"B").unwrap().contains(&"A"));
/// assert!(graph.neighbors(&"B").unwrap().contains(&"C"));
/// ```
pub fn build_graph<N, I>(edges: I) -> Graph<N>
where
    N: NodeId,
    I: IntoIterator<Item = (N, N)>,
{
    edges.into_iter().collect()
}
