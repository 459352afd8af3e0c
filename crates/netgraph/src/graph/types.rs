//! Core graph types: vertex indices and edge directions.

use serde::{Deserialize, Serialize};

/// Position of a vertex in the vertex store.
///
/// Indices are contiguous: removing a vertex renumbers every later vertex.
pub type VertexIndex = usize;

/// Direction for neighbor queries over the directed edge store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Follow outgoing edges (from this vertex)
    Outgoing,
    /// Follow incoming edges (to this vertex)
    Incoming,
    /// Follow edges in both directions (undirected view)
    Both,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Outgoing => write!(f, "Outgoing"),
            Direction::Incoming => write!(f, "Incoming"),
            Direction::Both => write!(f, "Both"),
        }
    }
}
