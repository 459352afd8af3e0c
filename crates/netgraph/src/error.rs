//! Error types for graph and network operations.
//!
//! All fallible operations return [`Result<T>`]. A failed operation never
//! leaves a partially applied mutation behind.

use std::fmt::Debug;
use thiserror::Error;

/// Result type alias for netgraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for all graph and network operations.
///
/// Every variant is a logic error on the caller's side; none are transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The operation needs at least one vertex but the structure is empty
    #[error("Empty collection: cannot {operation} on an empty graph")]
    EmptyCollection {
        /// What was attempted
        operation: String,
    },

    /// A referenced vertex is not part of the graph
    #[error("Element not found: {element}")]
    ElementNotFound {
        /// Debug rendering of the missing label, or the offending index
        element: String,
    },

    /// An argument was rejected before any mutation happened
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of what went wrong
        message: String,
    },

    /// The target cannot be reached from the source
    #[error("Unknown path: no route from {from} to {to}")]
    UnknownPath {
        /// Debug rendering of the source label
        from: String,
        /// Debug rendering of the target label
        to: String,
    },
}

impl GraphError {
    /// Create an [`GraphError::EmptyCollection`] for the named operation.
    pub fn empty(operation: impl Into<String>) -> Self {
        Self::EmptyCollection {
            operation: operation.into(),
        }
    }

    /// Create an [`GraphError::ElementNotFound`] for a vertex label.
    pub fn not_found<T: Debug + ?Sized>(vertex: &T) -> Self {
        Self::ElementNotFound {
            element: format!("{vertex:?}"),
        }
    }

    /// Create an [`GraphError::ElementNotFound`] for a vertex index.
    pub fn index_not_found(index: usize) -> Self {
        Self::ElementNotFound {
            element: format!("vertex index {index}"),
        }
    }

    /// Create an [`GraphError::InvalidArgument`] for a rejected edge weight.
    pub fn invalid_weight(weight: f64) -> Self {
        Self::InvalidArgument {
            message: format!("edge weight must be a non-negative number, got {weight}"),
        }
    }

    /// Create an [`GraphError::UnknownPath`] between two labels.
    pub fn unknown_path<T: Debug + ?Sized>(source: &T, target: &T) -> Self {
        Self::UnknownPath {
            from: format!("{source:?}"),
            to: format!("{target:?}"),
        }
    }
}
