//! Basic usage example for undigraph
//!
//! This example demonstrates:
//! - Building a graph from an edge list
//! - Traversing it breadth-first
//! - Finding shortest paths, components and cycles
//! - Exporting a highlighted path to Graphviz

use undigraph::export::{export_dot_styled, DotOptions};
use undigraph::{build_graph, TraversalConfig};

fn main() -> undigraph::Result<()> {
    // A small metro map: two lines sharing "Central", plus a detached shuttle
    let graph = build_graph([
        ("Airport", "Central"),
        ("Central", "Harbor"),
        ("Harbor", "Stadium"),
        ("Central", "Museum"),
        ("Museum", "Stadium"),
        ("Depot", "Yard"),
    ]);

    println!("Built graph with {} stations and {} links\n", graph.node_count(), graph.edge_count());

    let order = graph.bfs(&"Airport")?;
    println!("BFS from Airport: {}", order.join(" → "));

    let nearby = graph.traverse(&"Airport", &TraversalConfig::default().with_max_depth(1))?;
    println!("Within one stop of Airport: {}", nearby.join(", "));

    match graph.shortest_path(&"Airport", &"Stadium")? {
        Some(path) => println!("\nShortest route Airport → Stadium: {}", path.join(" → ")),
        None => println!("\nStadium is unreachable from Airport"),
    }
    match graph.shortest_path(&"Airport", &"Yard")? {
        Some(path) => println!("Shortest route Airport → Yard: {}", path.join(" → ")),
        None => println!("Yard is unreachable from Airport"),
    }

    println!("\n--- Components ---\n");
    for (index, component) in graph.connected_components().iter().enumerate() {
        let members: Vec<_> = component.iter().copied().collect();
        println!("  {}: {}", index + 1, members.join(", "));
    }

    match graph.find_cycle() {
        Some(cycle) => println!("\nLoop line found: {}", cycle.join(" → ")),
        None => println!("\nThe network has no loops"),
    }

    if let Some(path) = graph.shortest_path(&"Airport", &"Stadium")? {
        let dot = export_dot_styled(&graph, &DotOptions::default(), &path)?;
        println!("\n--- Graphviz ---\n\n{dot}");
    }

    Ok(())
}
