//! Sentinel policies: which vertices are traversed free of charge.
//!
//! A network consults its policy whenever an edge weight is written. Any
//! edge touching a sentinel vertex is stored with weight zero, e.g. the
//! entry and exit points of a modeled building.

use std::fmt;

/// Decides whether a vertex label is a free-traversal sentinel.
pub trait SentinelPolicy<T> {
    /// Returns true if edges touching `vertex` must weigh nothing.
    fn is_sentinel(&self, vertex: &T) -> bool;
}

/// Policy with no sentinel vertices. Weights are stored as given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoSentinels;

impl<T> SentinelPolicy<T> for NoSentinels {
    fn is_sentinel(&self, _vertex: &T) -> bool {
        false
    }
}

/// Policy that treats a fixed list of labels as sentinels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentinelLabels<T> {
    labels: Vec<T>,
}

impl<T> SentinelLabels<T> {
    /// Create a policy from the given labels.
    pub fn new<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            labels: labels.into_iter().collect(),
        }
    }

    /// The configured sentinel labels.
    pub fn labels(&self) -> &[T] {
        &self.labels
    }
}

impl<T: PartialEq> SentinelPolicy<T> for SentinelLabels<T> {
    fn is_sentinel(&self, vertex: &T) -> bool {
        self.labels.contains(vertex)
    }
}

/// Policy backed by a caller-supplied predicate.
#[derive(Clone, Copy)]
pub struct SentinelFn<F>(
    /// Returns true for sentinel labels
    pub F,
);

impl<F> fmt::Debug for SentinelFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SentinelFn(..)")
    }
}

impl<T, F> SentinelPolicy<T> for SentinelFn<F>
where
    F: Fn(&T) -> bool,
{
    fn is_sentinel(&self, vertex: &T) -> bool {
        (self.0)(vertex)
    }
}
