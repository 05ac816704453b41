//! Error types for quadtree construction and mutation.
//!
//! Lookups that match nothing are not errors: removal and range queries report
//! a zero count instead.

use thiserror::Error;

/// Errors returned by the quadtree and its configuration layer.
#[derive(Debug, Error)]
pub enum QuadTreeError {
    /// The world rectangle has a non-positive or non-finite extent.
    #[error("Invalid bounds: origin ({x}, {y}), size {width}x{height}")]
    InvalidBounds {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },

    /// A point does not lie inside the tree's root bounds.
    #[error("Point ({x}, {y}) is outside the tree bounds")]
    PointOutOfBounds { x: f64, y: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A structural invariant was found broken by [`crate::QuadTree::validate`].
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuadTreeError>;
