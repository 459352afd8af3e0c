//! Graph traversal algorithms over the adjacency matrix.
//!
//! Both traversals work on vertex indices and scan neighbors in increasing
//! index order, which makes their output fully deterministic.

use super::adjacency::AdjacencyMatrixGraph;
use super::types::{Direction, VertexIndex};
use std::collections::VecDeque;
use std::fmt::Debug;

/// Breadth-First Search from a starting index.
///
/// # Parameters
/// - `graph`: The graph to traverse
/// - `start`: Starting vertex index
/// - `direction`: Follow outgoing edges, incoming edges, or both
///
/// # Returns
/// Reachable vertex indices in dequeue order, including `start` first.
/// Empty if `start` is not a live index.
pub fn bfs<T>(
    graph: &AdjacencyMatrixGraph<T>,
    start: VertexIndex,
    direction: Direction,
) -> Vec<VertexIndex>
where
    T: PartialEq + Clone + Debug,
{
    let mut result = Vec::new();
    if !graph.index_is_valid(start) {
        return result;
    }

    let mut visited = vec![false; graph.size()];
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        result.push(current);

        for neighbor in graph.adjacent_indices(current, direction) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }
    }

    result
}

/// Depth-First Search from a starting index (iterative, explicit stack).
///
/// A vertex is recorded when it is pushed. At each step the stack top is
/// inspected: its first unvisited successor is pushed, or the top is popped
/// when none is left.
///
/// # Returns
/// Reachable vertex indices in discovery order, including `start` first.
/// Empty if `start` is not a live index.
pub fn dfs<T>(graph: &AdjacencyMatrixGraph<T>, start: VertexIndex) -> Vec<VertexIndex>
where
    T: PartialEq + Clone + Debug,
{
    let mut result = Vec::new();
    if !graph.index_is_valid(start) {
        return result;
    }

    let mut visited = vec![false; graph.size()];
    let mut stack = vec![start];

    visited[start] = true;
    result.push(start);

    while let Some(&top) = stack.last() {
        let next = graph
            .adjacent_indices(top, Direction::Outgoing)
            .find(|&neighbor| !visited[neighbor]);

        match next {
            Some(neighbor) => {
                visited[neighbor] = true;
                result.push(neighbor);
                stack.push(neighbor);
            }
            None => {
                stack.pop();
            }
        }
    }

    result
}
