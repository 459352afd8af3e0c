//! Single-source, single-target shortest path search.
//!
//! A label-setting (Dijkstra-style) search over non-negative weights. The
//! frontier may hold several entries for the same vertex; only the first one
//! popped settles it. Every piece of scratch state lives in [`search`]'s
//! stack frame, so concurrent readers never share it.

use crate::graph::{AdjacencyMatrixGraph, Direction, SquareMatrix, VertexIndex};
use log::trace;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A path found by [`WeightedNetwork::shortest_path`](crate::WeightedNetwork::shortest_path).
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<T> {
    /// Vertices from source to target, both inclusive
    pub vertices: Vec<T>,
    /// Sum of the edge weights along the path
    pub cost: f64,
}

impl<T> ShortestPath<T> {
    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// Back-pointer record: a vertex reached at `cost` via `predecessor`.
#[derive(Debug, Clone, Copy)]
struct PathNode {
    vertex: VertexIndex,
    predecessor: Option<usize>,
    cost: f64,
}

/// Frontier entry pointing into the path node arena.
///
/// Ordered so that [`BinaryHeap`] pops the lowest cost first and, among equal
/// costs, the earliest pushed entry first.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    cost: f64,
    sequence: u64,
    node: usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-priority frontier with FIFO tie-breaking and an arena of path nodes.
#[derive(Debug, Default)]
struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    nodes: Vec<PathNode>,
    pushed: u64,
}

impl Frontier {
    fn push(&mut self, node: PathNode) {
        let index = self.nodes.len();
        self.nodes.push(node);
        self.heap.push(FrontierEntry {
            cost: node.cost,
            sequence: self.pushed,
            node: index,
        });
        self.pushed += 1;
    }

    fn pop(&mut self) -> Option<(usize, PathNode)> {
        self.heap
            .pop()
            .map(|entry| (entry.node, self.nodes[entry.node]))
    }

    /// Vertex indices from the root of the chain to `node`, inclusive.
    fn path_to(&self, node: usize) -> Vec<VertexIndex> {
        let mut path = Vec::new();
        let mut current = Some(node);
        while let Some(index) = current {
            let node = self.nodes[index];
            path.push(node.vertex);
            current = node.predecessor;
        }
        path.reverse();
        path
    }
}

/// Search for the cheapest path from `source` to `target`.
///
/// Both indices must be live vertices of `graph`; `weights` must have the
/// same dimension as its adjacency matrix.
///
/// # Returns
/// The vertex indices along the path and its total cost, or `None` when
/// `target` is unreachable.
pub(crate) fn search<T>(
    graph: &AdjacencyMatrixGraph<T>,
    weights: &SquareMatrix<f64>,
    source: VertexIndex,
    target: VertexIndex,
) -> Option<(Vec<VertexIndex>, f64)>
where
    T: PartialEq + Clone + Debug,
{
    let mut frontier = Frontier::default();
    let mut settled = vec![false; graph.size()];

    frontier.push(PathNode {
        vertex: source,
        predecessor: None,
        cost: 0.0,
    });

    while let Some((node_index, node)) = frontier.pop() {
        trace!("Frontier pop: vertex={}, cost={}", node.vertex, node.cost);

        if node.vertex == target {
            return Some((frontier.path_to(node_index), node.cost));
        }
        if settled[node.vertex] {
            continue;
        }
        settled[node.vertex] = true;

        for neighbor in graph.adjacent_indices(node.vertex, Direction::Outgoing) {
            if !settled[neighbor] {
                frontier.push(PathNode {
                    vertex: neighbor,
                    predecessor: Some(node_index),
                    cost: node.cost + weights.get(node.vertex, neighbor),
                });
            }
        }
    }

    None
}
