//! Weighted network: a directed graph with a parallel weight matrix.

use super::policy::{NoSentinels, SentinelPolicy};
use super::shortest_path::{self, ShortestPath};
use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use crate::graph::{AdjacencyMatrixGraph, Graph, SquareMatrix, VertexIndex};
use log::{debug, trace};
use std::fmt::Debug;

/// Directed network with non-negative real edge weights.
///
/// Structural operations are delegated to an inner [`AdjacencyMatrixGraph`];
/// the weight matrix always has the same dimension as its adjacency matrix.
/// `weight[i][j]` is only meaningful while the edge `i → j` exists and is
/// reset to zero when the edge is removed.
///
/// The policy `P` marks sentinel vertices whose incident edges weigh nothing.
#[derive(Debug, Clone)]
pub struct WeightedNetwork<T, P = NoSentinels> {
    graph: AdjacencyMatrixGraph<T>,
    weights: SquareMatrix<f64>,
    policy: P,
}

impl<T> WeightedNetwork<T, NoSentinels>
where
    T: PartialEq + Clone + Debug,
{
    /// Create an empty network with the default capacity and no sentinels.
    pub fn new() -> Self {
        Self::with_policy(NoSentinels)
    }

    /// Create an empty network with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        let config = GraphConfig::new().with_initial_capacity(capacity);
        Self::with_config_and_policy(&config, NoSentinels)
    }

    /// Create an empty network from a [`GraphConfig`].
    pub fn with_config(config: &GraphConfig) -> Self {
        Self::with_config_and_policy(config, NoSentinels)
    }
}

impl<T> Default for WeightedNetwork<T, NoSentinels>
where
    T: PartialEq + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> WeightedNetwork<T, P>
where
    T: PartialEq + Clone + Debug,
    P: SentinelPolicy<T>,
{
    /// Create an empty network with the default capacity and the given
    /// sentinel policy.
    pub fn with_policy(policy: P) -> Self {
        Self::with_config_and_policy(&GraphConfig::default(), policy)
    }

    /// Create an empty network from a [`GraphConfig`] and a sentinel policy.
    pub fn with_config_and_policy(config: &GraphConfig, policy: P) -> Self {
        let graph = AdjacencyMatrixGraph::with_config(config);
        let weights = SquareMatrix::new(graph.capacity());
        Self {
            graph,
            weights,
            policy,
        }
    }

    /// The structural graph.
    pub fn graph(&self) -> &AdjacencyMatrixGraph<T> {
        &self.graph
    }

    /// The sentinel policy in use.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Append a vertex at the next free index.
    ///
    /// Both matrices are grown to the same dimension before the new vertex
    /// would overflow them.
    pub fn add_vertex(&mut self, vertex: T) -> VertexIndex {
        let required = self.graph.size() + 1;
        if required > self.weights.dimension() {
            let dimension = self.weights.grown_dimension(required);
            trace!(
                "Growing weight matrix: {} -> {dimension}",
                self.weights.dimension()
            );
            self.graph.grow_to(dimension);
            self.weights.grow_to(dimension);
        }

        let index = self.graph.add_vertex(vertex);
        self.weights.clear_index(index, self.graph.size());
        index
    }

    /// Append every vertex from `vertices` in order.
    pub fn add_vertices<I>(&mut self, vertices: I) -> Vec<VertexIndex>
    where
        I: IntoIterator<Item = T>,
    {
        vertices.into_iter().map(|v| self.add_vertex(v)).collect()
    }

    /// Remove the first vertex equal to `vertex` along with its weights.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::ElementNotFound`] if no vertex matches. The
    /// network is left untouched.
    pub fn remove_vertex(&mut self, vertex: &T) -> Result<T> {
        let index = self
            .graph
            .vertices()
            .iter()
            .position(|v| v == vertex)
            .ok_or_else(|| GraphError::not_found(vertex))?;

        self.weights.remove_index(index, self.graph.size());
        Ok(self.graph.remove_at(index))
    }

    /// Add the directed edge `from → to` with the given weight.
    ///
    /// The weight goes through [`set_edge_weight`](Self::set_edge_weight), so
    /// sentinel endpoints force it to zero.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] if `weight` is negative or NaN,
    /// [`GraphError::EmptyCollection`] on an empty network and
    /// [`GraphError::ElementNotFound`] if either label is absent. Nothing is
    /// mutated on error.
    pub fn add_weighted_edge(&mut self, from: &T, to: &T, weight: f64) -> Result<()> {
        check_weight(weight)?;
        let (i, j) = self.graph.endpoints(from, to)?;

        debug!("Adding edge: {from:?} -> {to:?}, weight={weight}");
        self.graph.add_edge_by_index(i, j)?;
        self.store_weight(from, to, i, j, weight);
        Ok(())
    }

    /// Add the directed edge `from → to` with weight zero.
    pub fn add_edge(&mut self, from: &T, to: &T) -> Result<()> {
        self.add_weighted_edge(from, to, 0.0)
    }

    /// Remove the directed edge `from → to` and reset its weight.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyCollection`] on an empty network and
    /// [`GraphError::ElementNotFound`] if either label is absent.
    pub fn remove_edge(&mut self, from: &T, to: &T) -> Result<()> {
        let (i, j) = self.graph.endpoints(from, to)?;
        self.graph.remove_edge_by_index(i, j)?;
        self.weights.set(i, j, 0.0);
        Ok(())
    }

    /// Set the weight stored for `from → to`.
    ///
    /// If either endpoint is a sentinel under the network's policy, the
    /// weights in **both** directions are set to zero and `weight` is ignored.
    ///
    /// # Errors
    ///
    /// Same as [`add_weighted_edge`](Self::add_weighted_edge).
    pub fn set_edge_weight(&mut self, from: &T, to: &T, weight: f64) -> Result<()> {
        check_weight(weight)?;
        let (i, j) = self.graph.endpoints(from, to)?;
        self.store_weight(from, to, i, j, weight);
        Ok(())
    }

    /// Weight stored for `from → to`; zero if it was never set.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyCollection`] on an empty network and
    /// [`GraphError::ElementNotFound`] if either label is absent.
    pub fn edge_weight(&self, from: &T, to: &T) -> Result<f64> {
        let (i, j) = self.graph.endpoints(from, to)?;
        Ok(self.weights.get(i, j))
    }

    /// Cheapest path from `source` to `target`, with its total cost.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyCollection`] on an empty network,
    /// [`GraphError::ElementNotFound`] if either label is absent and
    /// [`GraphError::UnknownPath`] if `target` is unreachable.
    pub fn shortest_path(&self, source: &T, target: &T) -> Result<ShortestPath<T>> {
        let (from, to) = self.graph.endpoints(source, target)?;

        let (indices, cost) = shortest_path::search(&self.graph, &self.weights, from, to)
            .ok_or_else(|| GraphError::unknown_path(source, target))?;

        let vertices: Vec<T> = indices
            .into_iter()
            .map(|index| self.graph.vertices()[index].clone())
            .collect();

        debug!("Shortest path {source:?} -> {target:?}: {vertices:?}, cost={cost}");
        Ok(ShortestPath { vertices, cost })
    }

    /// Vertices along the cheapest path from `source` to `target`, both
    /// inclusive.
    ///
    /// # Errors
    ///
    /// Same as [`shortest_path`](Self::shortest_path).
    pub fn shortest_path_weight(&self, source: &T, target: &T) -> Result<Vec<T>> {
        self.shortest_path(source, target).map(|path| path.vertices)
    }

    fn store_weight(&mut self, from: &T, to: &T, i: VertexIndex, j: VertexIndex, weight: f64) {
        if self.policy.is_sentinel(from) || self.policy.is_sentinel(to) {
            trace!("Sentinel edge {from:?} -> {to:?}: weight forced to zero");
            self.weights.set(i, j, 0.0);
            self.weights.set(j, i, 0.0);
        } else {
            self.weights.set(i, j, weight);
        }
    }
}

fn check_weight(weight: f64) -> Result<()> {
    // Also rejects NaN.
    if weight >= 0.0 {
        Ok(())
    } else {
        Err(GraphError::invalid_weight(weight))
    }
}

impl<T, P> Graph<T> for WeightedNetwork<T, P>
where
    T: PartialEq + Clone + Debug,
    P: SentinelPolicy<T>,
{
    fn structure(&self) -> &AdjacencyMatrixGraph<T> {
        &self.graph
    }

    fn add_vertex(&mut self, vertex: T) -> VertexIndex {
        WeightedNetwork::add_vertex(self, vertex)
    }

    fn remove_vertex(&mut self, vertex: &T) -> Result<T> {
        WeightedNetwork::remove_vertex(self, vertex)
    }

    fn add_edge(&mut self, from: &T, to: &T) -> Result<()> {
        WeightedNetwork::add_edge(self, from, to)
    }

    fn remove_edge(&mut self, from: &T, to: &T) -> Result<()> {
        WeightedNetwork::remove_edge(self, from, to)
    }
}
