//! JSON format export for D3.js and web visualization tools.
//!
//! Generates JSON with "nodes" and "links" arrays compatible with D3.js force-directed layouts.

use crate::graph::{Graph, NodeId};
use crate::{GraphError, Result};
use serde::Serialize;
use serde_json::{json, Value};

/// Export graph to D3.js-compatible JSON format.
///
/// Each node carries its degree; each undirected edge appears once as a link.
pub fn export_json<N: NodeId + Serialize>(graph: &Graph<N>) -> Result<String> {
    let mut nodes_array = Vec::with_capacity(graph.node_count());
    for (node, neighbors) in graph.adjacency() {
        nodes_array.push(json!({
            "id": node_to_json(node)?,
            "degree": neighbors.len(),
        }));
    }

    let mut links_array = Vec::new();
    for (source, target) in graph.edges() {
        links_array.push(json!({
            "source": node_to_json(source)?,
            "target": node_to_json(target)?,
        }));
    }

    let result = json!({
        "nodes": nodes_array,
        "links": links_array,
    });

    serde_json::to_string_pretty(&result)
        .map_err(|e| GraphError::serialization("Failed to render graph JSON", Some(e)))
}

/// Convert a node identifier to a JSON value
fn node_to_json<N: NodeId + Serialize>(node: &N) -> Result<Value> {
    serde_json::to_value(node).map_err(|e| {
        GraphError::serialization(format!("Failed to serialize node {node:?}"), Some(e))
    })
}
