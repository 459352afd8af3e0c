//! Construction-time configuration for graphs and networks.

use serde::{Deserialize, Serialize};

/// Number of vertex slots reserved by [`GraphConfig::default`].
pub const DEFAULT_CAPACITY: usize = 50;

/// Settings applied when a graph or network is created.
///
/// Deserializes from any serde format; missing fields fall back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Initial dimension of the adjacency (and weight) matrix
    pub initial_capacity: usize,
}

impl GraphConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the initial matrix dimension.
    ///
    /// Zero is allowed: the first inserted vertex grows the matrix.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}
