//! Unit tests for shortest path search on weighted networks.

use netgraph::{GraphError, SentinelLabels, WeightedNetwork};

// A -> B (2), A -> C (5), B -> D (1), C -> D (1), plus isolated E
fn diamond() -> WeightedNetwork<char> {
    let mut network = WeightedNetwork::new();
    network.add_vertices(['A', 'B', 'C', 'D', 'E']);
    network.add_weighted_edge(&'A', &'B', 2.0).unwrap();
    network.add_weighted_edge(&'A', &'C', 5.0).unwrap();
    network.add_weighted_edge(&'B', &'D', 1.0).unwrap();
    network.add_weighted_edge(&'C', &'D', 1.0).unwrap();
    network
}

#[test]
fn test_cheapest_path_wins() {
    let network = diamond();

    assert_eq!(
        network.shortest_path_weight(&'A', &'D').unwrap(),
        vec!['A', 'B', 'D']
    );

    let path = network.shortest_path(&'A', &'D').unwrap();
    assert_eq!(path.cost, 3.0);
    assert_eq!(path.hops(), 2);
}

#[test]
fn test_cheaper_longer_path_beats_direct_edge() {
    let mut network = diamond();
    network.add_weighted_edge(&'A', &'D', 10.0).unwrap();

    let path = network.shortest_path(&'A', &'D').unwrap();
    assert_eq!(path.vertices, vec!['A', 'B', 'D']);
    assert_eq!(path.cost, 3.0);
}

#[test]
fn test_unreachable_target() {
    let network = diamond();
    let err = network.shortest_path_weight(&'A', &'E').unwrap_err();
    assert_eq!(err, GraphError::unknown_path(&'A', &'E'));
}

#[test]
fn test_edges_are_followed_one_way_only() {
    let network = diamond();
    assert!(matches!(
        network.shortest_path_weight(&'D', &'A'),
        Err(GraphError::UnknownPath { .. })
    ));
}

#[test]
fn test_source_equals_target() {
    let network = diamond();
    let path = network.shortest_path(&'C', &'C').unwrap();
    assert_eq!(path.vertices, vec!['C']);
    assert_eq!(path.cost, 0.0);
}

#[test]
fn test_missing_endpoints() {
    let network = diamond();
    assert!(matches!(
        network.shortest_path_weight(&'A', &'Z'),
        Err(GraphError::ElementNotFound { .. })
    ));
    assert!(matches!(
        network.shortest_path_weight(&'Z', &'A'),
        Err(GraphError::ElementNotFound { .. })
    ));

    let empty: WeightedNetwork<char> = WeightedNetwork::new();
    assert!(matches!(
        empty.shortest_path_weight(&'A', &'B'),
        Err(GraphError::EmptyCollection { .. })
    ));
}

#[test]
fn test_fractional_costs_are_not_truncated() {
    // Both routes cost 1.x; truncating to integers would tie them and the
    // earlier-pushed, more expensive route through B would win.
    let mut network = WeightedNetwork::new();
    network.add_vertices(["s", "b", "c", "t"]);
    network.add_weighted_edge(&"s", &"b", 0.9).unwrap();
    network.add_weighted_edge(&"b", &"t", 0.9).unwrap();
    network.add_weighted_edge(&"s", &"c", 0.2).unwrap();
    network.add_weighted_edge(&"c", &"t", 1.1).unwrap();

    let path = network.shortest_path(&"s", &"t").unwrap();
    assert_eq!(path.vertices, vec!["s", "c", "t"]);
    assert!((path.cost - 1.3).abs() < 1e-9);
}

#[test]
fn test_equal_costs_resolve_in_discovery_order() {
    let mut network = WeightedNetwork::new();
    network.add_vertices([0, 1, 2, 3]);
    network.add_weighted_edge(&0, &1, 1.0).unwrap();
    network.add_weighted_edge(&0, &2, 1.0).unwrap();
    network.add_weighted_edge(&1, &3, 1.0).unwrap();
    network.add_weighted_edge(&2, &3, 1.0).unwrap();

    assert_eq!(network.shortest_path_weight(&0, &3).unwrap(), vec![0, 1, 3]);
}

#[test]
fn test_path_survives_vertex_removal() {
    let mut network = diamond();
    network.remove_vertex(&'B').unwrap();

    let path = network.shortest_path(&'A', &'D').unwrap();
    assert_eq!(path.vertices, vec!['A', 'C', 'D']);
    assert_eq!(path.cost, 6.0);
}

#[test]
fn test_sentinels_make_paths_free() {
    let mut network = WeightedNetwork::with_policy(SentinelLabels::new(["exit"]));
    network.add_vertices(["a", "b", "exit"]);
    network.add_weighted_edge(&"a", &"b", 4.0).unwrap();
    network.add_weighted_edge(&"b", &"exit", 8.0).unwrap();
    network.add_weighted_edge(&"a", &"exit", 100.0).unwrap();

    let path = network.shortest_path(&"a", &"exit").unwrap();
    assert_eq!(path.vertices, vec!["a", "exit"]);
    assert_eq!(path.cost, 0.0);
}

#[test]
fn test_zero_weight_cycle_terminates() {
    let mut network = WeightedNetwork::new();
    network.add_vertices(['x', 'y', 'z']);
    network.add_weighted_edge(&'x', &'y', 0.0).unwrap();
    network.add_weighted_edge(&'y', &'x', 0.0).unwrap();

    assert!(matches!(
        network.shortest_path_weight(&'x', &'z'),
        Err(GraphError::UnknownPath { .. })
    ));
}
