//! Adjacency-matrix backed directed graph.

use super::algorithms;
use super::matrix::SquareMatrix;
use super::types::{Direction, VertexIndex};
use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use log::{debug, trace};
use std::fmt::{self, Debug, Display};

/// Directed graph storing vertex labels in insertion order and edges in a
/// boolean adjacency matrix.
///
/// A vertex's index is its identity. Labels need not be unique; every lookup
/// by label resolves to the **first** matching index.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixGraph<T> {
    vertices: Vec<T>,
    adjacency: SquareMatrix<bool>,
}

impl<T> AdjacencyMatrixGraph<T>
where
    T: PartialEq + Clone + Debug,
{
    /// Create an empty graph with the default capacity.
    pub fn new() -> Self {
        Self::with_config(&GraphConfig::default())
    }

    /// Create an empty graph with room for `capacity` vertices before the
    /// matrix has to grow.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            adjacency: SquareMatrix::new(capacity),
        }
    }

    /// Create an empty graph from a [`GraphConfig`].
    pub fn with_config(config: &GraphConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    /// Append a vertex at the next free index.
    ///
    /// Grows the matrix first if the new index would not fit. The new vertex
    /// starts with no incident edges.
    pub fn add_vertex(&mut self, vertex: T) -> VertexIndex {
        let index = self.vertices.len();
        if index >= self.adjacency.dimension() {
            let dimension = self.adjacency.grown_dimension(index + 1);
            self.grow_to(dimension);
        }

        debug!("Adding vertex: index={index}, label={vertex:?}");
        self.vertices.push(vertex);
        self.adjacency.clear_index(index, self.vertices.len());

        index
    }

    /// Append every vertex from `vertices` in order.
    ///
    /// # Returns
    ///
    /// The indices assigned, in the same order as the input.
    pub fn add_vertices<I>(&mut self, vertices: I) -> Vec<VertexIndex>
    where
        I: IntoIterator<Item = T>,
    {
        vertices.into_iter().map(|v| self.add_vertex(v)).collect()
    }

    /// Remove the first vertex equal to `vertex`.
    ///
    /// Every later vertex moves down one index and the vertex's row and
    /// column are cut out of the adjacency matrix.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::ElementNotFound`] if no vertex matches. The graph
    /// is left untouched.
    pub fn remove_vertex(&mut self, vertex: &T) -> Result<T> {
        let index = self
            .position(vertex)
            .ok_or_else(|| GraphError::not_found(vertex))?;
        Ok(self.remove_at(index))
    }

    /// Add the directed edge `from → to`.
    ///
    /// No reverse edge is created.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyCollection`] on an empty graph and
    /// [`GraphError::ElementNotFound`] if either label is absent.
    pub fn add_edge(&mut self, from: &T, to: &T) -> Result<()> {
        let (i, j) = self.endpoints(from, to)?;
        self.set_edge(i, j, true);
        Ok(())
    }

    /// Add the directed edge between two vertex indices.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::ElementNotFound`] if either index is not a live
    /// vertex.
    pub fn add_edge_by_index(&mut self, from: VertexIndex, to: VertexIndex) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        self.set_edge(from, to, true);
        Ok(())
    }

    /// Remove the directed edge `from → to`. The reverse edge is unaffected.
    ///
    /// Removing an edge that does not exist is not an error.
    ///
    /// # Errors
    ///
    /// Same as [`AdjacencyMatrixGraph::add_edge`].
    pub fn remove_edge(&mut self, from: &T, to: &T) -> Result<()> {
        let (i, j) = self.endpoints(from, to)?;
        self.set_edge(i, j, false);
        Ok(())
    }

    /// Remove the directed edge between two vertex indices.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::ElementNotFound`] if either index is not a live
    /// vertex.
    pub fn remove_edge_by_index(&mut self, from: VertexIndex, to: VertexIndex) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        self.set_edge(from, to, false);
        Ok(())
    }

    /// Check for the directed edge `from → to`.
    pub fn has_edge(&self, from: &T, to: &T) -> Result<bool> {
        let (i, j) = self.endpoints(from, to)?;
        Ok(self.adjacency.get(i, j))
    }

    /// Index of the first vertex equal to `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyCollection`] on an empty graph and
    /// [`GraphError::ElementNotFound`] if no vertex matches.
    pub fn index_of(&self, vertex: &T) -> Result<VertexIndex> {
        if self.is_empty() {
            return Err(GraphError::empty("look up a vertex"));
        }
        self.position(vertex)
            .ok_or_else(|| GraphError::not_found(vertex))
    }

    /// Label stored at `index`, if it is a live vertex.
    pub fn vertex(&self, index: VertexIndex) -> Option<&T> {
        self.vertices.get(index)
    }

    /// All vertex labels in index order.
    pub fn vertices(&self) -> &[T] {
        &self.vertices
    }

    /// Whether `index` refers to a live vertex.
    pub fn index_is_valid(&self, index: VertexIndex) -> bool {
        index < self.vertices.len()
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Current matrix dimension, i.e. how many vertices fit before growth.
    pub fn capacity(&self) -> usize {
        self.adjacency.dimension()
    }

    /// Breadth-first traversal from the vertex at `start`.
    ///
    /// Vertices appear in dequeue order, each reachable vertex exactly once;
    /// successors are visited in increasing index order. An invalid `start`
    /// yields an empty vector.
    pub fn bfs_from_index(&self, start: VertexIndex) -> Vec<T> {
        self.labels(algorithms::bfs(self, start, Direction::Outgoing))
    }

    /// Depth-first traversal from the vertex at `start`.
    ///
    /// Vertices are recorded the moment they are discovered (pushed), not
    /// when they are finished. An invalid `start` yields an empty vector.
    pub fn dfs_from_index(&self, start: VertexIndex) -> Vec<T> {
        self.labels(algorithms::dfs(self, start))
    }

    /// Breadth-first traversal from the first vertex equal to `start`.
    ///
    /// # Errors
    ///
    /// Same as [`AdjacencyMatrixGraph::index_of`].
    pub fn bfs(&self, start: &T) -> Result<Vec<T>> {
        Ok(self.bfs_from_index(self.index_of(start)?))
    }

    /// Depth-first traversal from the first vertex equal to `start`.
    ///
    /// # Errors
    ///
    /// Same as [`AdjacencyMatrixGraph::index_of`].
    pub fn dfs(&self, start: &T) -> Result<Vec<T>> {
        Ok(self.dfs_from_index(self.index_of(start)?))
    }

    /// Whether every vertex is reachable from vertex 0 along directed edges.
    ///
    /// This is reachability from a fixed root, not symmetric connectivity:
    /// `a → b` is connected, `b → a` with `a` at index 0 is not. See
    /// [`is_strongly_connected`](Self::is_strongly_connected) and
    /// [`is_weakly_connected`](Self::is_weakly_connected).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyCollection`] on an empty graph.
    pub fn is_connected(&self) -> Result<bool> {
        self.reaches_all(&[Direction::Outgoing], "check connectivity")
    }

    /// Whether every vertex can reach every other along directed edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyCollection`] on an empty graph.
    pub fn is_strongly_connected(&self) -> Result<bool> {
        self.reaches_all(
            &[Direction::Outgoing, Direction::Incoming],
            "check strong connectivity",
        )
    }

    /// Whether the graph is connected when edge direction is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyCollection`] on an empty graph.
    pub fn is_weakly_connected(&self) -> Result<bool> {
        self.reaches_all(&[Direction::Both], "check weak connectivity")
    }

    /// Neighbors of `vertex` along the given direction, in index order.
    ///
    /// # Errors
    ///
    /// Same as [`AdjacencyMatrixGraph::index_of`].
    pub fn neighbours_directed(&self, vertex: &T, direction: Direction) -> Result<Vec<T>> {
        let index = self.index_of(vertex)?;
        Ok(self.labels(self.adjacent_indices(index, direction).collect()))
    }

    /// Predecessors and successors of `vertex`, sorted and without duplicate
    /// labels.
    ///
    /// This is the undirected view over the directed store.
    ///
    /// # Errors
    ///
    /// Same as [`AdjacencyMatrixGraph::index_of`].
    pub fn neighbours(&self, vertex: &T) -> Result<Vec<T>>
    where
        T: Ord,
    {
        let mut neighbours = self.neighbours_directed(vertex, Direction::Both)?;
        neighbours.sort();
        neighbours.dedup();
        Ok(neighbours)
    }

    /// Whether the edge between two live indices exists along `direction`.
    pub(crate) fn adjacent(&self, from: VertexIndex, to: VertexIndex, direction: Direction) -> bool {
        match direction {
            Direction::Outgoing => self.adjacency.get(from, to),
            Direction::Incoming => self.adjacency.get(to, from),
            Direction::Both => self.adjacency.get(from, to) || self.adjacency.get(to, from),
        }
    }

    /// Live indices adjacent to `index` along `direction`, ascending.
    pub(crate) fn adjacent_indices(
        &self,
        index: VertexIndex,
        direction: Direction,
    ) -> impl Iterator<Item = VertexIndex> + '_ {
        (0..self.size()).filter(move |&other| self.adjacent(index, other, direction))
    }

    /// Resolve both endpoints of an edge before anything is mutated.
    pub(crate) fn endpoints(&self, from: &T, to: &T) -> Result<(VertexIndex, VertexIndex)> {
        Ok((self.index_of(from)?, self.index_of(to)?))
    }

    /// Grow the matrix to `dimension`, preserving every edge.
    pub(crate) fn grow_to(&mut self, dimension: usize) {
        trace!(
            "Growing adjacency matrix: {} -> {dimension}",
            self.adjacency.dimension()
        );
        self.adjacency.grow_to(dimension);
        self.vertices
            .reserve(dimension.saturating_sub(self.vertices.len()));
    }

    /// Remove the vertex at a live index and compact the matrix.
    pub(crate) fn remove_at(&mut self, index: VertexIndex) -> T {
        let live = self.vertices.len();
        self.adjacency.remove_index(index, live);
        let removed = self.vertices.remove(index);
        debug!("Removed vertex: index={index}, label={removed:?}");
        removed
    }

    pub(crate) fn check_index(&self, index: VertexIndex) -> Result<()> {
        if self.index_is_valid(index) {
            Ok(())
        } else {
            Err(GraphError::index_not_found(index))
        }
    }

    fn set_edge(&mut self, from: VertexIndex, to: VertexIndex, present: bool) {
        trace!("Setting edge {from} -> {to}: {present}");
        self.adjacency.set(from, to, present);
    }

    fn position(&self, vertex: &T) -> Option<VertexIndex> {
        self.vertices.iter().position(|v| v == vertex)
    }

    fn labels(&self, indices: Vec<VertexIndex>) -> Vec<T> {
        indices
            .into_iter()
            .map(|index| self.vertices[index].clone())
            .collect()
    }

    fn reaches_all(&self, directions: &[Direction], operation: &str) -> Result<bool> {
        if self.is_empty() {
            return Err(GraphError::empty(operation));
        }
        Ok(directions.iter().all(|&direction| {
            let reached = algorithms::bfs(self, 0, direction).len();
            trace!("Reachable from vertex 0 ({direction}): {reached}/{}", self.size());
            reached == self.size()
        }))
    }
}

impl<T> Default for AdjacencyMatrixGraph<T>
where
    T: PartialEq + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the vertex list followed by one `0`/`1` row per live vertex.
impl<T: Display> Display for AdjacencyMatrixGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, vertex) in self.vertices.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{vertex}")?;
        }
        writeln!(f, "]")?;

        let live = self.vertices.len();
        for row in 0..live {
            for column in 0..live {
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", u8::from(self.adjacency.get(row, column)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
