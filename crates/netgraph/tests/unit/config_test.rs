//! Unit tests for GraphConfig loading and capacity handling.

use netgraph::{AdjacencyMatrixGraph, GraphConfig, WeightedNetwork, DEFAULT_CAPACITY};

#[test]
fn test_config_from_json() {
    let config: GraphConfig = serde_json::from_str(r#"{"initial_capacity": 8}"#).unwrap();
    assert_eq!(config.initial_capacity, 8);

    let graph: AdjacencyMatrixGraph<u32> = AdjacencyMatrixGraph::with_config(&config);
    assert_eq!(graph.capacity(), 8);
}

#[test]
fn test_config_missing_fields_use_defaults() {
    let config: GraphConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, GraphConfig::default());
    assert_eq!(config.initial_capacity, DEFAULT_CAPACITY);
}

#[test]
fn test_config_round_trips_through_json() {
    let config = GraphConfig::new().with_initial_capacity(3);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"initial_capacity":3}"#);
}

#[test]
fn test_default_graph_capacity() {
    let graph: AdjacencyMatrixGraph<u32> = AdjacencyMatrixGraph::new();
    assert_eq!(graph.capacity(), DEFAULT_CAPACITY);
}

#[test]
fn test_network_grows_past_configured_capacity() {
    let config = GraphConfig::new().with_initial_capacity(2);
    let mut network = WeightedNetwork::with_config(&config);

    for v in 0..9u32 {
        network.add_vertex(v);
    }
    for v in 0..8u32 {
        network.add_weighted_edge(&v, &(v + 1), f64::from(v)).unwrap();
    }

    assert_eq!(network.graph().size(), 9);
    assert!(network.graph().capacity() >= 9);
    assert_eq!(network.edge_weight(&3, &4).unwrap(), 3.0);
    assert!(network.graph().is_connected().unwrap());
}
