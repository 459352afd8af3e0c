//! Unit tests for weighted edges and sentinel policies.

use netgraph::{
    Graph, GraphError, SentinelFn, SentinelLabels, SentinelPolicy, WeightedNetwork,
};

fn rooms() -> WeightedNetwork<&'static str> {
    let mut network = WeightedNetwork::new();
    network.add_vertices(["hall", "kitchen", "office"]);
    network
}

#[test]
fn test_add_weighted_edge() {
    let mut network = rooms();
    network.add_weighted_edge(&"hall", &"kitchen", 3.25).unwrap();

    assert!(network.graph().has_edge(&"hall", &"kitchen").unwrap());
    assert!(!network.graph().has_edge(&"kitchen", &"hall").unwrap());
    assert_eq!(network.edge_weight(&"hall", &"kitchen").unwrap(), 3.25);
    assert_eq!(network.edge_weight(&"kitchen", &"hall").unwrap(), 0.0);
}

#[test]
fn test_negative_weight_rejected_without_mutation() {
    let mut network = rooms();
    network.add_weighted_edge(&"hall", &"office", 2.0).unwrap();

    let err = network
        .add_weighted_edge(&"hall", &"office", -1.0)
        .unwrap_err();
    assert!(matches!(err, GraphError::InvalidArgument { .. }));
    assert_eq!(network.edge_weight(&"hall", &"office").unwrap(), 2.0);

    let err = network
        .add_weighted_edge(&"kitchen", &"office", -1.0)
        .unwrap_err();
    assert!(matches!(err, GraphError::InvalidArgument { .. }));
    assert!(!network.graph().has_edge(&"kitchen", &"office").unwrap());
    assert_eq!(network.edge_weight(&"kitchen", &"office").unwrap(), 0.0);
}

#[test]
fn test_set_edge_weight_rejects_negative() {
    let mut network = rooms();
    network.add_weighted_edge(&"hall", &"office", 2.0).unwrap();

    let err = network
        .set_edge_weight(&"hall", &"office", -0.5)
        .unwrap_err();
    assert!(matches!(err, GraphError::InvalidArgument { .. }));
    assert_eq!(network.edge_weight(&"hall", &"office").unwrap(), 2.0);

    network.set_edge_weight(&"hall", &"office", 0.75).unwrap();
    assert_eq!(network.edge_weight(&"hall", &"office").unwrap(), 0.75);
}

#[test]
fn test_weighted_edge_with_missing_vertex() {
    let mut network = rooms();
    let err = network
        .add_weighted_edge(&"hall", &"garage", 1.0)
        .unwrap_err();
    assert!(matches!(err, GraphError::ElementNotFound { .. }));
    assert!(matches!(
        network.edge_weight(&"garage", &"hall"),
        Err(GraphError::ElementNotFound { .. })
    ));

    let mut empty: WeightedNetwork<&str> = WeightedNetwork::new();
    assert!(matches!(
        empty.add_weighted_edge(&"a", &"b", 1.0),
        Err(GraphError::EmptyCollection { .. })
    ));
}

#[test]
fn test_add_then_remove_edge_restores_weights() {
    let mut network = rooms();
    network.add_weighted_edge(&"kitchen", &"office", 9.5).unwrap();
    network.remove_edge(&"kitchen", &"office").unwrap();

    assert!(!network.graph().has_edge(&"kitchen", &"office").unwrap());
    assert_eq!(network.edge_weight(&"kitchen", &"office").unwrap(), 0.0);
}

#[test]
fn test_unweighted_add_edge_has_zero_weight() {
    let mut network = rooms();
    Graph::add_edge(&mut network, &"office", &"hall").unwrap();

    assert!(network.graph().has_edge(&"office", &"hall").unwrap());
    assert_eq!(network.edge_weight(&"office", &"hall").unwrap(), 0.0);
}

#[test]
fn test_remove_vertex_keeps_remaining_weights() {
    let mut network = rooms();
    network.add_weighted_edge(&"hall", &"kitchen", 1.0).unwrap();
    network.add_weighted_edge(&"kitchen", &"office", 2.0).unwrap();
    network.add_weighted_edge(&"office", &"hall", 3.0).unwrap();

    network.remove_vertex(&"kitchen").unwrap();

    assert_eq!(network.size(), 2);
    assert_eq!(network.edge_weight(&"office", &"hall").unwrap(), 3.0);
    assert_eq!(network.edge_weight(&"hall", &"office").unwrap(), 0.0);
    assert!(!network.graph().has_edge(&"hall", &"office").unwrap());

    let err = network.remove_vertex(&"kitchen").unwrap_err();
    assert!(matches!(err, GraphError::ElementNotFound { .. }));
}

#[test]
fn test_sentinel_labels_force_zero_weight() {
    let mut network = WeightedNetwork::with_policy(SentinelLabels::new(["entrance", "exit"]));
    network.add_vertices(["entrance", "hall", "exit"]);

    network.add_weighted_edge(&"hall", &"exit", 7.0).unwrap();
    network.add_weighted_edge(&"entrance", &"hall", 4.0).unwrap();

    assert_eq!(network.edge_weight(&"hall", &"exit").unwrap(), 0.0);
    assert_eq!(network.edge_weight(&"exit", &"hall").unwrap(), 0.0);
    assert_eq!(network.edge_weight(&"entrance", &"hall").unwrap(), 0.0);
    assert!(network.policy().is_sentinel(&"exit"));
}

#[test]
fn test_sentinel_zeroes_both_directions() {
    let mut network = WeightedNetwork::with_policy(SentinelFn(|v: &&str| v.starts_with("door")));
    network.add_vertices(["room", "door-1"]);

    network.add_weighted_edge(&"room", &"door-1", 2.0).unwrap();
    network.set_edge_weight(&"door-1", &"room", 5.0).unwrap();

    assert_eq!(network.edge_weight(&"room", &"door-1").unwrap(), 0.0);
    assert_eq!(network.edge_weight(&"door-1", &"room").unwrap(), 0.0);
}

#[test]
fn test_non_sentinel_weights_untouched_by_policy() {
    let mut network = WeightedNetwork::with_policy(SentinelLabels::new(["exit"]));
    network.add_vertices(["a", "b", "exit"]);
    network.add_weighted_edge(&"a", &"b", 1.5).unwrap();

    assert_eq!(network.edge_weight(&"a", &"b").unwrap(), 1.5);
}
