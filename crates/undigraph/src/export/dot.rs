//! DOT format export for Graphviz visualization.
//!
//! Generates an undirected Graphviz `graph` with one `--` line per edge.

use crate::graph::{Graph, NodeId};
use crate::Result;
use std::collections::BTreeSet;
use std::fmt::Display;

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Graph name written in the header
    pub name: String,
    /// Graph layout direction: LR, TB, RL, BT
    pub rankdir: String,
    /// Shape for every node (ellipse, box, circle, etc.)
    pub node_shape: String,
    /// Color for highlighted nodes and edges (hex color code)
    pub highlight_color: String,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            name: "undigraph".to_string(),
            rankdir: "LR".to_string(),
            node_shape: "ellipse".to_string(),
            highlight_color: "#E53935".to_string(),
        }
    }
}

/// Export graph to Graphviz DOT format
pub fn export_dot<N: NodeId + Display>(graph: &Graph<N>) -> Result<String> {
    export_dot_styled(graph, &DotOptions::default(), &[])
}

/// Export graph to Graphviz DOT format with custom styling.
///
/// `highlight` is a node sequence, typically a result of
/// [`shortest_path`](crate::graph::algorithms::shortest_path). Its nodes and
/// the edges between consecutive entries are drawn in
/// [`DotOptions::highlight_color`].
pub fn export_dot_styled<N: NodeId + Display>(
    graph: &Graph<N>,
    options: &DotOptions,
    highlight: &[N],
) -> Result<String> {
    let highlighted_nodes: BTreeSet<&N> = highlight.iter().collect();
    let highlighted_edges: BTreeSet<(&N, &N)> = highlight
        .windows(2)
        .map(|pair| ordered(&pair[0], &pair[1]))
        .collect();

    let mut output = String::new();

    // Header
    output.push_str(&format!("graph {} {{\n", quote(&options.name)));
    output.push_str(&format!("    rankdir={};\n", options.rankdir));
    output.push_str(&format!("    node [shape={}];\n\n", options.node_shape));

    for node in graph.nodes() {
        let style = if highlighted_nodes.contains(node) {
            format!(" [color=\"{}\", penwidth=2]", options.highlight_color)
        } else {
            String::new()
        };
        output.push_str(&format!("    {}{style};\n", quote(&node.to_string())));
    }

    output.push('\n');

    for (a, b) in graph.edges() {
        let style = if highlighted_edges.contains(&(a, b)) {
            format!(" [color=\"{}\", penwidth=2]", options.highlight_color)
        } else {
            String::new()
        };
        output.push_str(&format!(
            "    {} -- {}{style};\n",
            quote(&a.to_string()),
            quote(&b.to_string())
        ));
    }

    output.push_str("}\n");

    Ok(output)
}

fn ordered<'a, N: Ord>(a: &'a N, b: &'a N) -> (&'a N, &'a N) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Quote an identifier, escaping special characters for DOT
fn quote(s: &str) -> String {
    format!("\"{}\"", escape_dot_label(s))
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
