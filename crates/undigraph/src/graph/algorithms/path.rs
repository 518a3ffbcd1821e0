//! Shortest paths over unweighted edges.

use super::traversal::{walk_from, Visitor};
use crate::error::Result;
use crate::graph::{Graph, NodeId};
use log::{debug, trace};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::ControlFlow;

/// Records the parent of every admitted node and stops once `target` is admitted.
struct ParentTracker<'g, 'q, N> {
    target: &'q N,
    parents: BTreeMap<&'g N, &'g N>,
}

impl<'g, N: NodeId> Visitor<'g, N> for ParentTracker<'g, '_, N> {
    fn discover(&mut self, node: &'g N, parent: Option<&'g N>, _depth: usize) -> ControlFlow<()> {
        if let Some(parent) = parent {
            self.parents.insert(node, parent);
        }
        if node == self.target {
            trace!("Reached {node:?}, stopping early");
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }
}

/// Find a shortest path from `start` to `end`.
///
/// Returns the nodes from `start` to `end` inclusive, or `Ok(None)` when
/// `end` is unreachable, including when `end` is not in the graph at all.
/// Every edge weighs the same, so the first time the breadth-first walk
/// admits `end` its parent chain has the minimum edge count. Among equally
/// short paths, the ascending neighbor order decides which one is returned.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`](crate::GraphError::NodeNotFound) if
/// `start` is not in the graph.
///
/// # Example
///
/// ```
/// use undigraph::{build_graph, graph::algorithms::shortest_path};
///
/// let graph = build_graph([("A", "B"), ("B", "C"), ("C", "D"), ("A", "D")]);
/// assert_eq!(shortest_path(&graph, &"A", &"D").unwrap(), Some(vec!["A", "D"]));
/// assert_eq!(shortest_path(&graph, &"A", &"Z").unwrap(), None);
/// ```
pub fn shortest_path<N: NodeId>(graph: &Graph<N>, start: &N, end: &N) -> Result<Option<Vec<N>>> {
    let start = graph.node_ref(start)?;
    let Ok(end) = graph.node_ref(end) else {
        debug!("Target {end:?} is not in the graph, no path from {start:?}");
        return Ok(None);
    };

    if start == end {
        return Ok(Some(vec![start.clone()]));
    }

    let mut tracker = ParentTracker {
        target: end,
        parents: BTreeMap::new(),
    };
    // Break only means `end` was reached early
    let _ = walk_from(graph, start, &mut BTreeSet::new(), None, &mut tracker);

    if !tracker.parents.contains_key(end) {
        debug!("No path from {start:?} to {end:?}");
        return Ok(None);
    }

    let mut path = vec![end.clone()];
    let mut current = end;
    while let Some(&parent) = tracker.parents.get(current) {
        path.push(parent.clone());
        current = parent;
    }
    path.reverse();

    debug!(
        "Shortest path from {start:?} to {end:?} has {} edges",
        path.len() - 1
    );
    Ok(Some(path))
}

/// Edge count of a shortest path from `start` to `end`, or `Ok(None)` if unreachable.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`](crate::GraphError::NodeNotFound) if
/// `start` is not in the graph.
pub fn distance<N: NodeId>(graph: &Graph<N>, start: &N, end: &N) -> Result<Option<usize>> {
    Ok(shortest_path(graph, start, end)?.map(|path| path.len() - 1))
}
