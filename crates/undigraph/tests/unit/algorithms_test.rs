//! Unit tests for graph algorithms
//!
//! Tests cover:
//! - BFS order, completeness and depth reporting
//! - DFS preorder and configured traversals
//! - Shortest paths, including the no-path result
//! - Connected components
//! - Cycle detection, including self-loops and forests

use std::collections::BTreeSet;
use undigraph::graph::algorithms::{
    bfs, bfs_levels, component_of, connected_components, dfs, distance, find_cycle, has_cycle,
    is_connected, shortest_path, traverse,
};
use undigraph::{build_graph, Graph, GraphBuilder, GraphError, TraversalConfig};

// Helper: A - B - C - D plus the shortcut A - D
fn create_square() -> Graph<&'static str> {
    build_graph([("A", "B"), ("B", "C"), ("C", "D"), ("A", "D")])
}

// Helper: a path 0 - 1 - ... - (n - 1)
fn create_chain(n: u32) -> Graph<u32> {
    build_graph((1..n).map(|i| (i - 1, i)))
}

#[test]
fn test_bfs_diamond() {
    let graph = build_graph([("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
    let result = bfs(&graph, &"A").unwrap();

    assert_eq!(result[0], "A");
    assert_eq!(
        result.iter().copied().collect::<BTreeSet<_>>(),
        BTreeSet::from(["A", "B", "C", "D"])
    );
    assert_eq!(result, vec!["A", "B", "C", "D"]);
}

#[test]
fn test_bfs_stays_in_start_component() {
    let graph = build_graph([("A", "B"), ("X", "Y")]);
    assert_eq!(bfs(&graph, &"A").unwrap(), vec!["A", "B"]);
    assert_eq!(bfs(&graph, &"Y").unwrap(), vec!["Y", "X"]);
}

#[test]
fn test_bfs_handles_cycles_and_self_loops() {
    let graph = build_graph([(1, 2), (2, 3), (3, 1), (2, 2)]);
    assert_eq!(bfs(&graph, &2).unwrap(), vec![2, 1, 3]);
}

#[test]
fn test_bfs_isolated_start() {
    let graph = GraphBuilder::new().with_node("solo").with_edge("a", "b").build();
    assert_eq!(bfs(&graph, &"solo").unwrap(), vec!["solo"]);
}

#[test]
fn test_bfs_missing_start_is_node_not_found() {
    let graph = create_square();
    let err = bfs(&graph, &"Z").unwrap_err();
    assert!(matches!(err, GraphError::NodeNotFound { ref node } if node == "\"Z\""));
}

#[test]
fn test_bfs_levels_report_edge_distance() {
    let graph = create_square();
    let levels = bfs_levels(&graph, &"A").unwrap();
    assert_eq!(levels, vec![("A", 0), ("B", 1), ("D", 1), ("C", 2)]);
}

#[test]
fn test_dfs_preorder() {
    let graph = create_square();
    assert_eq!(dfs(&graph, &"A").unwrap(), vec!["A", "B", "C", "D"]);
    assert!(dfs(&graph, &"Z").is_err());
}

#[test]
fn test_traverse_with_max_depth() {
    let graph = create_chain(6);

    let config = TraversalConfig::breadth_first().with_max_depth(2);
    assert_eq!(traverse(&graph, &0, &config).unwrap(), vec![0, 1, 2]);

    let config = TraversalConfig::depth_first().with_max_depth(3);
    assert_eq!(traverse(&graph, &0, &config).unwrap(), vec![0, 1, 2, 3]);

    let config = TraversalConfig::default();
    assert_eq!(traverse(&graph, &0, &config).unwrap().len(), 6);
}

#[test]
fn test_depth_limited_dfs_matches_bfs_reach() {
    // Square with a tail: D is 1 edge from A directly, 3 edges along A-B-C-D
    let graph = build_graph([("A", "B"), ("B", "C"), ("C", "D"), ("A", "D"), ("D", "E")]);

    for depth in 0..4 {
        let breadth = TraversalConfig::breadth_first().with_max_depth(depth);
        let depth_first = TraversalConfig::depth_first().with_max_depth(depth);

        let bfs_order = traverse(&graph, &"A", &breadth).unwrap();
        let bfs_reach: BTreeSet<_> = bfs_order.iter().copied().collect();
        let dfs_order = traverse(&graph, &"A", &depth_first).unwrap();
        let dfs_reach: BTreeSet<_> = dfs_order.iter().copied().collect();

        assert_eq!(dfs_reach, bfs_reach, "depth {depth}");
        assert_eq!(dfs_reach.len(), dfs_order.len(), "a node was emitted twice");
    }

    let config = TraversalConfig::depth_first().with_max_depth(2);
    assert_eq!(
        traverse(&graph, &"A", &config).unwrap(),
        vec!["A", "B", "C", "D", "E"]
    );
}

#[test]
fn test_shortest_path_takes_direct_edge() {
    let graph = create_square();
    let path = shortest_path(&graph, &"A", &"D").unwrap().unwrap();
    assert_eq!(path, vec!["A", "D"]);
}

#[test]
fn test_shortest_path_missing_end_is_no_path() {
    let graph = create_square();
    assert_eq!(shortest_path(&graph, &"A", &"Z").unwrap(), None);
}

#[test]
fn test_shortest_path_disconnected_is_no_path() {
    let graph = build_graph([("A", "B"), ("C", "D")]);
    assert_eq!(shortest_path(&graph, &"A", &"D").unwrap(), None);
    assert_eq!(distance(&graph, &"A", &"D").unwrap(), None);
}

#[test]
fn test_shortest_path_missing_start_is_error() {
    let graph = create_square();
    assert!(matches!(
        shortest_path(&graph, &"Z", &"A"),
        Err(GraphError::NodeNotFound { .. })
    ));
    assert!(matches!(
        shortest_path(&graph, &"Z", &"Z"),
        Err(GraphError::NodeNotFound { .. })
    ));
}

#[test]
fn test_shortest_path_to_self() {
    let graph = create_square();
    assert_eq!(shortest_path(&graph, &"C", &"C").unwrap(), Some(vec!["C"]));
}

#[test]
fn test_shortest_path_along_chain() {
    let graph = create_chain(50);
    let path = shortest_path(&graph, &49, &0).unwrap().unwrap();
    assert_eq!(path.len(), 50);
    assert_eq!(path[0], 49);
    assert_eq!(path[49], 0);
    assert!(path.windows(2).all(|pair| pair[0] == pair[1] + 1));
}

#[test]
fn test_connected_components_two_groups() {
    let graph = build_graph([("A", "B"), ("C", "D"), ("E", "F"), ("A", "E")]);
    let components = connected_components(&graph);

    assert_eq!(components.len(), 2);
    assert!(components.contains(&BTreeSet::from(["C", "D"])));
    assert!(components.contains(&BTreeSet::from(["A", "B", "E", "F"])));
    // Ordered by smallest member
    assert_eq!(components[0], BTreeSet::from(["A", "B", "E", "F"]));
}

#[test]
fn test_connected_components_order_ignores_insertion() {
    let graph = build_graph([(9, 8), (5, 4), (1, 7)]);
    let components = connected_components(&graph);
    assert_eq!(
        components,
        vec![
            BTreeSet::from([1, 7]),
            BTreeSet::from([4, 5]),
            BTreeSet::from([8, 9]),
        ]
    );
}

#[test]
fn test_component_of_and_is_connected() {
    let graph = build_graph([("A", "B"), ("C", "D")]);
    assert_eq!(component_of(&graph, &"B").unwrap(), BTreeSet::from(["A", "B"]));
    assert!(!is_connected(&graph));
    assert!(is_connected(&create_square()));
}

#[test]
fn test_has_cycle_tree_and_triangle() {
    let tree = build_graph([("A", "B"), ("A", "C"), ("B", "D")]);
    assert!(!has_cycle(&tree));

    let cyclic = build_graph([("A", "B"), ("B", "C"), ("C", "A")]);
    assert!(has_cycle(&cyclic));
}

#[test]
fn test_has_cycle_forest_is_acyclic() {
    let forest = build_graph([(1, 2), (2, 3), (4, 5), (6, 7), (6, 8)]);
    assert!(!has_cycle(&forest));
    assert_eq!(find_cycle(&forest), None);
}

#[test]
fn test_has_cycle_self_loop() {
    let graph = build_graph([("A", "B"), ("C", "C")]);
    assert!(has_cycle(&graph));
    assert_eq!(find_cycle(&graph), Some(vec!["C", "C"]));
}

#[test]
fn test_find_cycle_is_closed_walk() {
    let graph = create_square();
    let cycle = find_cycle(&graph).unwrap();

    assert_eq!(cycle.first(), cycle.last());
    assert_eq!(cycle.len(), 5);
    for pair in cycle.windows(2) {
        assert!(graph.neighbors(&pair[0]).unwrap().contains(&pair[1]));
    }
}

#[test]
fn test_empty_graph() {
    let graph: Graph<String> = build_graph(Vec::new());
    assert!(connected_components(&graph).is_empty());
    assert!(!has_cycle(&graph));
    assert!(bfs(&graph, &"A".to_string()).is_err());
}

#[test]
fn test_graph_methods_delegate() {
    let graph = create_square();
    assert_eq!(graph.bfs(&"A").unwrap(), bfs(&graph, &"A").unwrap());
    assert_eq!(graph.dfs(&"A").unwrap(), dfs(&graph, &"A").unwrap());
    assert_eq!(
        graph.shortest_path(&"B", &"D").unwrap(),
        shortest_path(&graph, &"B", &"D").unwrap()
    );
    assert_eq!(graph.connected_components(), connected_components(&graph));
    assert_eq!(graph.has_cycle(), has_cycle(&graph));
    assert_eq!(graph.find_cycle(), find_cycle(&graph));
    assert_eq!(
        graph.traverse(&"A", &TraversalConfig::default()).unwrap(),
        bfs(&graph, &"A").unwrap()
    );
}
