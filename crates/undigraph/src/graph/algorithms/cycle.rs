//! Undirected cycle detection.
//!
//! A breadth-first walk builds a spanning forest. Any edge outside that
//! forest closes a cycle: while expanding a node, a neighbor that is already
//! visited and is not the node's own parent can only be reached twice if a
//! cycle exists. A self-loop meets the same condition, since a node is never
//! its own parent.

use super::traversal::{walk_from, Visitor};
use crate::graph::{Graph, NodeId};
use log::{debug, trace};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::ControlFlow;

/// Tracks parents and stops at the first non-tree edge.
struct ClosingEdge<'g, N> {
    parents: BTreeMap<&'g N, &'g N>,
    found: Option<(&'g N, &'g N)>,
}

impl<'g, N: NodeId> Visitor<'g, N> for ClosingEdge<'g, N> {
    fn discover(&mut self, node: &'g N, parent: Option<&'g N>, _depth: usize) -> ControlFlow<()> {
        if let Some(parent) = parent {
            self.parents.insert(node, parent);
        }
        ControlFlow::Continue(())
    }

    fn revisit(&mut self, node: &'g N, neighbor: &'g N, parent: Option<&'g N>) -> ControlFlow<()> {
        if parent == Some(neighbor) {
            return ControlFlow::Continue(());
        }
        trace!("Edge {node:?} -- {neighbor:?} closes a cycle");
        self.found = Some((node, neighbor));
        ControlFlow::Break(())
    }
}

/// Determine whether the graph contains a cycle.
///
/// Every component is checked. A forest returns `false`; a self-loop
/// returns `true`.
///
/// # Example
///
/// ```
/// use undigraph::{build_graph, graph::algorithms::has_cycle};
///
/// assert!(!has_cycle(&build_graph([("A", "B"), ("A", "C"), ("B", "D")])));
/// assert!(has_cycle(&build_graph([("A", "B"), ("B", "C"), ("C", "A")])));
/// ```
pub fn has_cycle<N: NodeId>(graph: &Graph<N>) -> bool {
    find_cycle(graph).is_some()
}

/// Find one cycle, returned closed (first node repeated at the end).
///
/// The cycle runs through the closing edge found by the walk and the tree
/// paths from both of its endpoints up to their nearest common ancestor. A
/// self-loop on `a` is reported as `[a, a]`.
pub fn find_cycle<N: NodeId>(graph: &Graph<N>) -> Option<Vec<N>> {
    let mut visited: BTreeSet<&N> = BTreeSet::new();
    let mut detector = ClosingEdge {
        parents: BTreeMap::new(),
        found: None,
    };

    for node in graph.nodes() {
        if visited.contains(node) {
            continue;
        }
        if walk_from(graph, node, &mut visited, None, &mut detector).is_break() {
            break;
        }
    }

    match detector.found {
        Some((from, to)) => {
            let cycle = close_cycle(&detector.parents, from, to);
            debug!("Found cycle of {} edges", cycle.len() - 1);
            Some(cycle)
        }
        None => {
            debug!("No cycle in {} nodes", graph.node_count());
            None
        }
    }
}

/// Join the tree paths of `from` and `to` through their nearest common ancestor.
fn close_cycle<'g, N: NodeId>(parents: &BTreeMap<&'g N, &'g N>, from: &'g N, to: &'g N) -> Vec<N> {
    let mut from_chain = vec![from];
    let mut current = from;
    while let Some(&parent) = parents.get(current) {
        from_chain.push(parent);
        current = parent;
    }
    let on_from_chain: BTreeSet<&N> = from_chain.iter().copied().collect();

    let mut to_chain = Vec::new();
    let mut current = to;
    while !on_from_chain.contains(current) {
        to_chain.push(current);
        match parents.get(current) {
            Some(&parent) => current = parent,
            None => break,
        }
    }

    let meet = from_chain
        .iter()
        .position(|node| *node == current)
        .unwrap_or(from_chain.len() - 1);

    let mut cycle: Vec<N> = from_chain[..=meet].iter().rev().map(|node| (*node).clone()).collect();
    cycle.extend(to_chain.into_iter().cloned());
    cycle.push(from_chain[meet].clone());
    cycle
}
