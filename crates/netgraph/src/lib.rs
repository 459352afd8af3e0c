//! # netgraph
//!
//! Directed graphs over an adjacency matrix, and weighted networks built on
//! top of them.
//!
//! ## Core Principles
//!
//! - **Index Identity**: a vertex is its position; removal renumbers later vertices
//! - **Directed Storage**: edges are one-way; undirected views are explicit queries
//! - **Atomic Failures**: a rejected operation leaves the structure unchanged
//! - **Deterministic Output**: traversals scan neighbors in index order
//!
//! ## Architecture
//!
//! ```text
//! WeightedNetwork (weights, sentinel policy, shortest path)
//!     ↓
//! AdjacencyMatrixGraph (vertices, edges, BFS/DFS, connectivity)
//!     ↓
//! Square matrices (growth, row/column compaction)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use netgraph::{Graph, WeightedNetwork};
//!
//! let mut network = WeightedNetwork::new();
//! for room in ["A", "B", "C", "D"] {
//!     network.add_vertex(room);
//! }
//! network.add_weighted_edge(&"A", &"B", 2.0).unwrap();
//! network.add_weighted_edge(&"A", &"C", 5.0).unwrap();
//! network.add_weighted_edge(&"B", &"D", 1.0).unwrap();
//! network.add_weighted_edge(&"C", &"D", 1.0).unwrap();
//!
//! let path = network.shortest_path(&"A", &"D").unwrap();
//! assert_eq!(path.vertices, vec!["A", "B", "D"]);
//! assert_eq!(path.cost, 3.0);
//! assert_eq!(network.bfs(&"A").unwrap(), vec!["A", "B", "C", "D"]);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod graph;
pub mod network;

// Re-export main types
pub use config::{GraphConfig, DEFAULT_CAPACITY};
pub use error::{GraphError, Result};
pub use graph::{AdjacencyMatrixGraph, Direction, Graph, VertexIndex};
pub use network::{
    NoSentinels, SentinelFn, SentinelLabels, SentinelPolicy, ShortestPath, WeightedNetwork,
};
