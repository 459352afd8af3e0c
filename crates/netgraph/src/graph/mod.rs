//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`AdjacencyMatrixGraph`]: directed graph over a boolean adjacency matrix
//! - [`Graph`]: the operation surface shared by graphs and networks
//! - [`Direction`]: which edges a neighbor query follows

mod adjacency;
mod matrix;
mod types;
pub mod algorithms;

pub use adjacency::AdjacencyMatrixGraph;
pub(crate) use matrix::SquareMatrix;
pub use types::{Direction, VertexIndex};

use crate::error::Result;
use std::fmt::Debug;

/// Operations every graph-like structure supports.
///
/// Implementors supply the mutating operations and expose their structural
/// graph; traversal and query operations are provided on top of it.
pub trait Graph<T>
where
    T: PartialEq + Clone + Debug,
{
    /// The underlying directed structure.
    fn structure(&self) -> &AdjacencyMatrixGraph<T>;

    /// Append a vertex, returning its index.
    fn add_vertex(&mut self, vertex: T) -> VertexIndex;

    /// Remove the first vertex equal to `vertex`, returning its label.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::ElementNotFound`](crate::GraphError::ElementNotFound)
    /// if no vertex matches.
    fn remove_vertex(&mut self, vertex: &T) -> Result<T>;

    /// Add the directed edge `from → to`.
    fn add_edge(&mut self, from: &T, to: &T) -> Result<()>;

    /// Remove the directed edge `from → to`.
    fn remove_edge(&mut self, from: &T, to: &T) -> Result<()>;

    /// Breadth-first traversal from `start`.
    fn bfs(&self, start: &T) -> Result<Vec<T>> {
        self.structure().bfs(start)
    }

    /// Depth-first (discovery order) traversal from `start`.
    fn dfs(&self, start: &T) -> Result<Vec<T>> {
        self.structure().dfs(start)
    }

    /// Returns true if there are no vertices.
    fn is_empty(&self) -> bool {
        self.structure().is_empty()
    }

    /// Whether every vertex is reachable from vertex 0.
    fn is_connected(&self) -> Result<bool> {
        self.structure().is_connected()
    }

    /// Number of vertices.
    fn size(&self) -> usize {
        self.structure().size()
    }

    /// Index of the first vertex equal to `vertex`.
    fn index_of(&self, vertex: &T) -> Result<VertexIndex> {
        self.structure().index_of(vertex)
    }

    /// Sorted, duplicate-free predecessors and successors of `vertex`.
    fn neighbours(&self, vertex: &T) -> Result<Vec<T>>
    where
        T: Ord,
    {
        self.structure().neighbours(vertex)
    }
}

impl<T> Graph<T> for AdjacencyMatrixGraph<T>
where
    T: PartialEq + Clone + Debug,
{
    fn structure(&self) -> &AdjacencyMatrixGraph<T> {
        self
    }

    fn add_vertex(&mut self, vertex: T) -> VertexIndex {
        AdjacencyMatrixGraph::add_vertex(self, vertex)
    }

    fn remove_vertex(&mut self, vertex: &T) -> Result<T> {
        AdjacencyMatrixGraph::remove_vertex(self, vertex)
    }

    fn add_edge(&mut self, from: &T, to: &T) -> Result<()> {
        AdjacencyMatrixGraph::add_edge(self, from, to)
    }

    fn remove_edge(&mut self, from: &T, to: &T) -> Result<()> {
        AdjacencyMatrixGraph::remove_edge(self, from, to)
    }
}
