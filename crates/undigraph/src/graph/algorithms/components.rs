//! Connected components.

use super::traversal::{walk_from, Recorder};
use crate::error::Result;
use crate::graph::{Graph, NodeId};
use log::debug;
use std::collections::BTreeSet;

/// Partition the graph into connected components.
///
/// Nodes are scanned in ascending order and every node not yet assigned
/// seeds a breadth-first walk that collects its whole component. The first
/// node of each component found this way is its minimum, so the result is
/// ordered by each component's smallest node. Isolated nodes form singleton
/// components.
///
/// # Example
///
/// ```
/// use undigraph::{build_graph, graph::algorithms::connected_components};
/// use std::collections::BTreeSet;
///
/// let graph = build_graph([("A", "B"), ("C", "D"), ("E", "F"), ("A", "E")]);
/// let components = connected_components(&graph);
/// assert_eq!(components, vec![
///     BTreeSet::from(["A", "B", "E", "F"]),
///     BTreeSet::from(["C", "D"]),
/// ]);
/// ```
pub fn connected_components<N: NodeId>(graph: &Graph<N>) -> Vec<BTreeSet<N>> {
    let mut assigned: BTreeSet<&N> = BTreeSet::new();
    let mut components: Vec<BTreeSet<N>> = Vec::new();

    for node in graph.nodes() {
        if assigned.contains(node) {
            continue;
        }
        let mut recorder = Recorder::new();
        // Recorder never breaks
        let _ = walk_from(graph, node, &mut assigned, None, &mut recorder);
        components.push(
            recorder
                .visited
                .into_iter()
                .map(|(member, _)| member.clone())
                .collect(),
        );
    }

    debug!(
        "Found {} connected components across {} nodes",
        components.len(),
        graph.node_count()
    );
    components
}

/// The connected component containing `node`.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`](crate::GraphError::NodeNotFound) if
/// `node` is not in the graph.
pub fn component_of<N: NodeId>(graph: &Graph<N>, node: &N) -> Result<BTreeSet<N>> {
    let node = graph.node_ref(node)?;
    let mut recorder = Recorder::new();
    // Recorder never breaks
    let _ = walk_from(graph, node, &mut BTreeSet::new(), None, &mut recorder);
    Ok(recorder
        .visited
        .into_iter()
        .map(|(member, _)| member.clone())
        .collect())
}

/// Whether every node is reachable from every other. The empty graph counts as connected.
pub fn is_connected<N: NodeId>(graph: &Graph<N>) -> bool {
    match graph.nodes().next() {
        Some(first) => {
            let mut recorder = Recorder::new();
            // Recorder never breaks
            let _ = walk_from(graph, first, &mut BTreeSet::new(), None, &mut recorder);
            recorder.visited.len() == graph.node_count()
        }
        None => true,
    }
}
