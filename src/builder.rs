//! Tree builder for flexible configuration
//!
//! This module provides a builder pattern for creating trees from a
//! configuration file or from individual settings.

use crate::config::Config;
use crate::error::Result;
use crate::geometry::Rect;
use crate::quadtree::QuadTree;

/// Builder for [`QuadTree`] with fluent setters for bounds and split limits.
///
/// # Example
///
/// ```rust
/// use spatio_quadtree::{QuadTreeBuilder, Rect};
///
/// let mut tree = QuadTreeBuilder::new()
///     .bounds(Rect::new(-180.0, -90.0, 360.0, 180.0))
///     .max_levels(10)
///     .max_points_per_node(32)
///     .build::<u64>()?;
/// tree.insert(-74.0060, 40.7128, 1)?;
/// # Ok::<(), spatio_quadtree::QuadTreeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuadTreeBuilder {
    config: Config,
}

impl QuadTreeBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the world rectangle covered by the tree.
    pub fn bounds(mut self, bounds: Rect) -> Self {
        self.config = self.config.with_bounds(bounds);
        self
    }

    pub fn max_levels(mut self, max_levels: u32) -> Self {
        self.config = self.config.with_max_levels(max_levels);
        self
    }

    pub fn max_points_per_node(mut self, max_points: usize) -> Self {
        self.config = self.config.with_max_points_per_node(max_points);
        self
    }

    /// Replace the whole configuration (bounds and limits).
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Build the tree. Fails if the configuration does not validate.
    pub fn build<P>(self) -> Result<QuadTree<P>> {
        QuadTree::new(self.config)
    }
}
