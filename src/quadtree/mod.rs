//! Region quadtree over 2D points with opaque payloads.
//!
//! The tree covers a fixed world rectangle. Leaves hold points until they
//! exceed the configured capacity, at which point they split into four
//! quadrants, down to a maximum depth. Nodes are never merged back, so the
//! structure only grows until the tree is cleared or dropped.
//!
//! # Example
//!
//! ```rust
//! use spatio_quadtree::{QuadTree, Rect};
//!
//! let mut tree = QuadTree::with_bounds(0.0, 0.0, 100.0, 100.0, 4, 2)?;
//! tree.insert(1.0, 1.0, "a")?;
//! tree.insert(2.0, 2.0, "b")?;
//! tree.insert(3.0, 3.0, "c")?;
//!
//! let mut hits = Vec::new();
//! let count = tree.find(&Rect::new(0.0, 0.0, 10.0, 10.0), |x, y, name| {
//!     hits.push((x, y, *name));
//! });
//! assert_eq!(count, 3);
//! assert_eq!(tree.walk(|_, _, _| {}), 3);
//! # Ok::<(), spatio_quadtree::QuadTreeError>(())
//! ```
//!
//! Operations are synchronous and take `&self`/`&mut self`; callers sharing a
//! tree across threads wrap it in their own lock.

mod node;
mod quadrant;
mod validation;

pub use node::Iter;
pub use quadrant::{QUADRANTS, Quadrant};

use crate::config::Config;
use crate::error::{QuadTreeError, Result};
use crate::geometry::{Point, Rect};
use crate::payload::PayloadRef;
use node::{Node, NodeCounts, SplitPolicy};
use serde::{Deserialize, Serialize};

/// Structural statistics for a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Number of stored entries
    pub point_count: usize,
    /// Number of nodes, branches and leaves together
    pub node_count: usize,
    pub leaf_count: usize,
    /// Deepest level reached by any node (the root is level 0)
    pub max_depth: u32,
}

/// A region quadtree storing `(point, payload)` entries.
///
/// Payloads are owned by the tree only as values of `P`; for reference,
/// pointer or handle payloads the referenced data stays with the caller.
/// Duplicate entries are legal and counted individually.
#[derive(Debug)]
pub struct QuadTree<P> {
    config: Config,
    policy: SplitPolicy,
    root: Node<P>,
}

impl<P> QuadTree<P> {
    /// Create an empty tree from a validated configuration.
    ///
    /// A `max_points_per_node` of zero is treated as one. Fails with
    /// `InvalidBounds` unless the bounds are finite with positive size, and
    /// with `InvalidConfig` if `max_levels` exceeds [`Config::MAX_LEVELS_LIMIT`].
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        if config.max_points_per_node == 0 {
            log::warn!("max_points_per_node of 0 is not usable, using 1 instead");
        }

        let policy = SplitPolicy {
            max_levels: config.max_levels,
            max_points_per_node: config.effective_max_points_per_node(),
        };
        let root = Node::leaf(config.bounds, 0);

        Ok(Self {
            config,
            policy,
            root,
        })
    }

    /// Create an empty tree covering `x..=x+width`, `y..=y+height`.
    ///
    /// Same checks as [`QuadTree::new`]; `max_levels` may be at most
    /// [`Config::MAX_LEVELS_LIMIT`].
    pub fn with_bounds(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        max_levels: u32,
        max_points_per_node: usize,
    ) -> Result<Self> {
        Self::new(
            Config::new(Rect::new(x, y, width, height))
                .with_max_levels(max_levels)
                .with_max_points_per_node(max_points_per_node),
        )
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn bounds(&self) -> &Rect {
        &self.config.bounds
    }

    pub fn max_levels(&self) -> u32 {
        self.policy.max_levels
    }

    /// Split capacity in effect, after sanitizing zero to one.
    pub fn max_points_per_node(&self) -> usize {
        self.policy.max_points_per_node
    }

    /// Insert a point and its payload.
    ///
    /// Points outside the tree bounds, or with non-finite coordinates, are
    /// rejected and leave the tree untouched. No duplicate check is made.
    pub fn insert(&mut self, x: f64, y: f64, payload: P) -> Result<()> {
        let point = Point::new(x, y);
        if !self.bounds().contains(&point) {
            log::debug!("Rejecting insert of ({}, {}) outside tree bounds", x, y);
            return Err(QuadTreeError::PointOutOfBounds { x, y });
        }

        self.root.insert(point, payload, self.policy);
        Ok(())
    }

    /// Remove every entry stored on the path of `(x, y)` for which `predicate`
    /// returns `true`.
    ///
    /// The point only selects the leaf to search; entries in that leaf are
    /// matched by the predicate alone.
    pub fn remove_where<F>(&mut self, x: f64, y: f64, mut predicate: F) -> usize
    where
        F: FnMut(&Point, &P) -> bool,
    {
        let point = Point::new(x, y);
        if !self.bounds().contains(&point) {
            log::debug!("Removal at ({}, {}) is outside tree bounds", x, y);
            return 0;
        }

        self.root.remove_where(&point, &mut predicate)
    }

    /// Visit every entry whose point lies inside `query` (edges inclusive).
    ///
    /// Subtrees whose bounds do not intersect `query` are skipped. Returns the
    /// number of matches. Children are visited NW, NE, SW, SE and a leaf's
    /// entries newest first.
    pub fn find<F>(&self, query: &Rect, mut callback: F) -> usize
    where
        F: FnMut(f64, f64, &P),
    {
        if !query.is_finite() {
            log::warn!("Rejecting range query with non-finite coordinates");
            return 0;
        }

        self.root
            .find(query, &mut |point: &Point, payload: &P| {
                callback(point.x, point.y, payload)
            })
    }

    /// Number of entries inside `query`.
    pub fn count(&self, query: &Rect) -> usize {
        self.find(query, |_, _, _| {})
    }

    /// Collect the entries inside `query`.
    pub fn query<'a>(&'a self, query: &Rect) -> Vec<(Point, &'a P)> {
        let mut results = Vec::new();
        if !query.is_finite() {
            log::warn!("Rejecting range query with non-finite coordinates");
            return results;
        }

        self.root.find(query, &mut |point: &'a Point, payload: &'a P| {
            results.push((*point, payload))
        });
        results
    }

    /// Visit every stored entry. Returns the total entry count.
    pub fn walk<F>(&self, mut callback: F) -> usize
    where
        F: FnMut(f64, f64, &P),
    {
        self.root
            .walk(&mut |point: &Point, payload: &P| callback(point.x, point.y, payload))
    }

    pub fn len(&self) -> usize {
        self.walk(|_, _, _| {})
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Iterate entries in walk order.
    pub fn iter(&self) -> Iter<'_, P> {
        Iter::new(&self.root)
    }

    /// Drop every node and entry. Bounds and limits are kept.
    pub fn clear(&mut self) {
        self.root = Node::leaf(self.config.bounds, 0);
    }

    pub fn stats(&self) -> TreeStats {
        let mut counts = NodeCounts::default();
        self.root.collect_stats(&mut counts);
        TreeStats {
            point_count: counts.points,
            node_count: counts.nodes,
            leaf_count: counts.leaves,
            max_depth: counts.max_level,
        }
    }

    pub(crate) fn root(&self) -> &Node<P> {
        &self.root
    }
}

impl<P: PayloadRef> QuadTree<P> {
    /// Remove every entry carrying `payload` from the leaf that `(x, y)`
    /// belongs to. Payloads are compared by identity, see [`PayloadRef`].
    ///
    /// `(x, y)` must be the point the payload was inserted at; a different
    /// point may lead to a leaf that does not hold it, and nothing is removed.
    /// Returns the number of entries removed.
    pub fn remove_payload(&mut self, x: f64, y: f64, payload: &P) -> usize {
        self.remove_where(x, y, |_, stored| stored.same_payload(payload))
    }
}

impl<'a, P> IntoIterator for &'a QuadTree<P> {
    type Item = (Point, &'a P);
    type IntoIter = Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
