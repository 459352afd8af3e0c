//! Weighted networks and shortest-path search.
//!
//! - [`WeightedNetwork`]: a directed graph with non-negative edge weights
//! - [`SentinelPolicy`]: which vertices are traversed free of charge
//! - [`ShortestPath`]: result of a single-source, single-target search

mod policy;
mod shortest_path;
mod weighted;

pub use policy::{NoSentinels, SentinelFn, SentinelLabels, SentinelPolicy};
pub use shortest_path::ShortestPath;
pub use weighted::WeightedNetwork;
