//! Core graph types: the node identifier bound and the adjacency representation.

use super::algorithms;
use crate::config::TraversalConfig;
use crate::error::{GraphError, Result};
use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

/// Bound for node identifiers.
///
/// Any ordered, cloneable, debuggable value can name a node (string labels,
/// integers, tuples). Ordering only makes iteration deterministic.
pub trait NodeId: Ord + Clone + Debug {}

impl<T: Ord + Clone + Debug> NodeId for T {}

/// An undirected, unweighted graph stored as a mapping of node to neighbor set.
///
/// A `Graph` is immutable once built: construct one with
/// [`build_graph`](crate::build_graph), [`GraphBuilder`](crate::GraphBuilder),
/// `FromIterator` or `TryFrom<BTreeMap<..>>`. Every neighbor relation is
/// symmetric, and a self-loop shows up as a node listed among its own
/// neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<N> {
    adjacency: BTreeMap<N, BTreeSet<N>>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }
}

impl<N: NodeId> Graph<N> {
    /// Wrap an adjacency mapping already known to be symmetric.
    pub(crate) fn from_symmetric(adjacency: BTreeMap<N, BTreeSet<N>>) -> Self {
        Self { adjacency }
    }

    /// Check whether `node` is part of the graph.
    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Neighbor set of `node`, or `None` if the node is absent.
    pub fn neighbors(&self, node: &N) -> Option<&BTreeSet<N>> {
        self.adjacency.get(node)
    }

    /// Number of neighbors of `node`. A self-loop contributes one.
    pub fn degree(&self, node: &N) -> Option<usize> {
        self.adjacency.get(node).map(BTreeSet::len)
    }

    /// All nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.adjacency.keys()
    }

    /// Each undirected edge once, as `(a, b)` with `a <= b`.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.adjacency.iter().flat_map(|(node, neighbors)| {
            neighbors
                .iter()
                .filter(move |neighbor| *neighbor >= node)
                .map(move |neighbor| (node, neighbor))
        })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Borrow the underlying adjacency mapping.
    pub fn adjacency(&self) -> &BTreeMap<N, BTreeSet<N>> {
        &self.adjacency
    }

    /// Neighbors of `node` in ascending order; empty for an absent node.
    pub(crate) fn adjacent<'g>(&'g self, node: &N) -> impl Iterator<Item = &'g N> + 'g {
        self.adjacency.get(node).into_iter().flatten()
    }

    /// The graph's own copy of `node`, so traversal state can borrow from the graph.
    pub(crate) fn node_ref(&self, node: &N) -> Result<&N> {
        self.adjacency
            .get_key_value(node)
            .map(|(key, _)| key)
            .ok_or_else(|| GraphError::node_not_found(node))
    }
}

// Algorithm conveniences, see `graph::algorithms` for details.
impl<N: NodeId> Graph<N> {
    /// Breadth-first visitation order from `start`.
    pub fn bfs(&self, start: &N) -> Result<Vec<N>> {
        algorithms::bfs(self, start)
    }

    /// Depth-first preorder from `start`.
    pub fn dfs(&self, start: &N) -> Result<Vec<N>> {
        algorithms::dfs(self, start)
    }

    /// Traverse from `start` with the given configuration.
    pub fn traverse(&self, start: &N, config: &TraversalConfig) -> Result<Vec<N>> {
        algorithms::traverse(self, start, config)
    }

    /// Shortest path from `start` to `end`, or `Ok(None)` if unreachable.
    pub fn shortest_path(&self, start: &N, end: &N) -> Result<Option<Vec<N>>> {
        algorithms::shortest_path(self, start, end)
    }

    /// Connected components ordered by their smallest node.
    pub fn connected_components(&self) -> Vec<BTreeSet<N>> {
        algorithms::connected_components(self)
    }

    /// Whether the graph contains a cycle.
    pub fn has_cycle(&self) -> bool {
        algorithms::has_cycle(self)
    }

    /// One closed cycle, if any.
    pub fn find_cycle(&self) -> Option<Vec<N>> {
        algorithms::find_cycle(self)
    }
}

impl<N: NodeId> TryFrom<BTreeMap<N, BTreeSet<N>>> for Graph<N> {
    type Error = GraphError;

    /// Accept a prebuilt adjacency mapping after checking that every listed
    /// neighbor has an entry listing the node back.
    fn try_from(adjacency: BTreeMap<N, BTreeSet<N>>) -> Result<Self> {
        for (node, neighbors) in &adjacency {
            for neighbor in neighbors {
                let mirrored = adjacency
                    .get(neighbor)
                    .is_some_and(|back| back.contains(node));
                if !mirrored {
                    return Err(GraphError::asymmetric(node, neighbor));
                }
            }
        }
        Ok(Self { adjacency })
    }
}

impl<N> From<Graph<N>> for BTreeMap<N, BTreeSet<N>> {
    fn from(graph: Graph<N>) -> Self {
        graph.adjacency
    }
}

impl<N: Serialize> Serialize for Graph<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.adjacency.serialize(serializer)
    }
}

impl<'de, N> Deserialize<'de> for Graph<N>
where
    N: NodeId + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let adjacency = BTreeMap::<N, BTreeSet<N>>::deserialize(deserializer)?;
        Graph::try_from(adjacency).map_err(D::Error::custom)
    }
}
