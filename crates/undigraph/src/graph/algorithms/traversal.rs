//! Breadth-first walk and the traversals built on it.

use crate::config::{Strategy, TraversalConfig};
use crate::error::Result;
use crate::graph::{Graph, NodeId};
use log::{debug, trace};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::ops::ControlFlow;

/// Callbacks driven by [`walk`].
///
/// Returning [`ControlFlow::Break`] from either hook stops the walk
/// immediately.
pub trait Visitor<'g, N> {
    /// Called when `node` is admitted to the frontier, including the start
    /// node (with `parent == None` and `depth == 0`).
    fn discover(&mut self, node: &'g N, parent: Option<&'g N>, depth: usize) -> ControlFlow<()>;

    /// Called while expanding `node` for each neighbor that was already
    /// visited. `parent` is the node through which `node` was reached.
    fn revisit(
        &mut self,
        _node: &'g N,
        _neighbor: &'g N,
        _parent: Option<&'g N>,
    ) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

/// Walk the component of `start` breadth-first.
///
/// Neighbors are admitted in ascending order. `visited` is seeded with
/// `start` and grows with every admitted node; passing the same set to
/// consecutive walks skips nodes admitted earlier. Nodes at `max_depth` are
/// discovered but not expanded.
///
/// Returns [`ControlFlow::Break`] if the visitor stopped the walk.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`](crate::GraphError::NodeNotFound) if
/// `start` is not in the graph.
pub fn walk<'g, N, V>(
    graph: &'g Graph<N>,
    start: &N,
    visited: &mut BTreeSet<&'g N>,
    max_depth: Option<usize>,
    visitor: &mut V,
) -> Result<ControlFlow<()>>
where
    N: NodeId,
    V: Visitor<'g, N> + ?Sized,
{
    let start = graph.node_ref(start)?;
    Ok(walk_from(graph, start, visited, max_depth, visitor))
}

/// [`walk`] from a node already borrowed from `graph`.
pub(crate) fn walk_from<'g, N, V>(
    graph: &'g Graph<N>,
    start: &'g N,
    visited: &mut BTreeSet<&'g N>,
    max_depth: Option<usize>,
    visitor: &mut V,
) -> ControlFlow<()>
where
    N: NodeId,
    V: Visitor<'g, N> + ?Sized,
{
    let mut frontier: VecDeque<(&'g N, Option<&'g N>, usize)> = VecDeque::new();

    visited.insert(start);
    visitor.discover(start, None, 0)?;
    frontier.push_back((start, None, 0));

    while let Some((current, parent, depth)) = frontier.pop_front() {
        if max_depth.is_some_and(|max| depth >= max) {
            continue;
        }

        for neighbor in graph.adjacent(current) {
            if visited.insert(neighbor) {
                visitor.discover(neighbor, Some(current), depth + 1)?;
                frontier.push_back((neighbor, Some(current), depth + 1));
            } else {
                visitor.revisit(current, neighbor, parent)?;
            }
        }
    }

    ControlFlow::Continue(())
}

/// Records discovered nodes with their depth, in discovery order.
///
/// With a FIFO frontier, discovery order is also dequeue order.
#[derive(Debug)]
pub(crate) struct Recorder<'g, N> {
    pub(crate) visited: Vec<(&'g N, usize)>,
}

impl<'g, N> Recorder<'g, N> {
    pub(crate) fn new() -> Self {
        Self {
            visited: Vec::new(),
        }
    }
}

impl<'g, N> Visitor<'g, N> for Recorder<'g, N> {
    fn discover(&mut self, node: &'g N, _parent: Option<&'g N>, depth: usize) -> ControlFlow<()> {
        self.visited.push((node, depth));
        ControlFlow::Continue(())
    }
}

fn record<'g, N: NodeId>(
    graph: &'g Graph<N>,
    start: &N,
    max_depth: Option<usize>,
) -> Result<Vec<(&'g N, usize)>> {
    let start = graph.node_ref(start)?;
    let mut recorder = Recorder::new();
    // Recorder never breaks
    let _ = walk_from(graph, start, &mut BTreeSet::new(), max_depth, &mut recorder);
    debug!(
        "BFS from {start:?} visited {} nodes",
        recorder.visited.len()
    );
    Ok(recorder.visited)
}

/// Breadth-first search from `start`.
///
/// Returns the nodes of `start`'s connected component in visitation order,
/// each exactly once and `start` first. Unvisited neighbors are admitted in
/// ascending order, so the sequence is fully deterministic.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`](crate::GraphError::NodeNotFound) if
/// `start` is not in the graph.
///
/// # Example
///
/// ```
/// use undigraph::{build_graph, graph::algorithms::bfs};
///
/// let graph = build_graph([("A", "C"), ("A", "B"), ("B", "D")]);
/// assert_eq!(bfs(&graph, &"A").unwrap(), vec!["A", "B", "C", "D"]);
/// ```
pub fn bfs<N: NodeId>(graph: &Graph<N>, start: &N) -> Result<Vec<N>> {
    Ok(record(graph, start, None)?
        .into_iter()
        .map(|(node, _)| node.clone())
        .collect())
}

/// Breadth-first search that also reports each node's depth.
///
/// The depth of a node is its edge distance from `start`.
pub fn bfs_levels<N: NodeId>(graph: &Graph<N>, start: &N) -> Result<Vec<(N, usize)>> {
    Ok(record(graph, start, None)?
        .into_iter()
        .map(|(node, depth)| (node.clone(), depth))
        .collect())
}

/// Depth-first preorder from `start` (iterative).
///
/// Always descends into the smallest unvisited neighbor first. Uses an
/// explicit stack of neighbor cursors instead of recursion.
pub fn dfs<N: NodeId>(graph: &Graph<N>, start: &N) -> Result<Vec<N>> {
    depth_first(graph, start, None)
}

/// With a depth limit, a node first reached through a long branch is entered
/// again whenever a shorter route to it turns up, so every node within
/// `max_depth` edges of `start` is emitted. Each node is emitted once.
fn depth_first<N: NodeId>(
    graph: &Graph<N>,
    start: &N,
    max_depth: Option<usize>,
) -> Result<Vec<N>> {
    let start = graph.node_ref(start)?;
    // Smallest depth each node has been entered at
    let mut entered: BTreeMap<&N, usize> = BTreeMap::from([(start, 0)]);
    let mut order = vec![start.clone()];
    let mut stack = vec![(0usize, graph.adjacent(start))];

    while let Some((depth, cursor)) = stack.last_mut() {
        let depth = *depth;
        if max_depth.is_some_and(|max| depth >= max) {
            stack.pop();
            continue;
        }

        let next = cursor.find(|neighbor| match entered.get(neighbor) {
            None => true,
            Some(&seen) => max_depth.is_some() && depth + 1 < seen,
        });
        match next {
            Some(next) => {
                if entered.insert(next, depth + 1).is_none() {
                    order.push(next.clone());
                } else {
                    trace!("Re-entering {next:?} at shallower depth {}", depth + 1);
                }
                stack.push((depth + 1, graph.adjacent(next)));
            }
            None => {
                stack.pop();
            }
        }
    }

    debug!("DFS from {start:?} visited {} nodes", order.len());
    Ok(order)
}

/// Traverse from `start` according to `config`.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`](crate::GraphError::NodeNotFound) if
/// `start` is not in the graph.
pub fn traverse<N: NodeId>(
    graph: &Graph<N>,
    start: &N,
    config: &TraversalConfig,
) -> Result<Vec<N>> {
    match config.strategy {
        Strategy::BreadthFirst => Ok(record(graph, start, config.max_depth)?
            .into_iter()
            .map(|(node, _)| node.clone())
            .collect()),
        Strategy::DepthFirst => depth_first(graph, start, config.max_depth),
    }
}
