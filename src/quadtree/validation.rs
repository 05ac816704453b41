//! Structural self-check for trees.
//!
//! None of these checks run on the insert or query paths. Tests and debugging
//! harnesses call [`QuadTree::validate`] after a sequence of operations.

use super::QuadTree;
use super::node::Node;
use super::quadrant::{QUADRANTS, Quadrant};
use crate::error::{QuadTreeError, Result};
use crate::geometry::Point;

impl<P> QuadTree<P> {
    /// Check every structural invariant and report the first one broken.
    ///
    /// - the root is at level 0 and each child is one level below its parent
    /// - no node is deeper than `max_levels`
    /// - a branch's four children quarter its bounds in NW, NE, SW, SE order
    /// - a leaf above the maximum level holds at most `max_points_per_node`
    /// - each entry lies inside its leaf's bounds and sits in the leaf its
    ///   point selects when descending from the root
    pub fn validate(&self) -> Result<()> {
        let root = self.root();
        if root.level() != 0 {
            return Err(violation(format!("root is at level {}", root.level())));
        }
        if root.bounds() != self.bounds() {
            return Err(violation("root bounds differ from tree bounds".to_string()));
        }
        self.validate_node(root)
    }

    fn validate_node(&self, node: &Node<P>) -> Result<()> {
        if node.level() > self.max_levels() {
            return Err(violation(format!(
                "node at level {} exceeds max_levels {}",
                node.level(),
                self.max_levels()
            )));
        }

        match node {
            Node::Branch {
                level,
                bounds,
                children,
            } => {
                for (child, quadrant) in children.iter().zip(QUADRANTS) {
                    if child.level() != level + 1 {
                        return Err(violation(format!(
                            "{:?} child of level {} node is at level {}",
                            quadrant,
                            level,
                            child.level()
                        )));
                    }
                    if *child.bounds() != bounds.quadrant(quadrant) {
                        return Err(violation(format!(
                            "{:?} child bounds {:?} do not quarter {:?}",
                            quadrant,
                            child.bounds(),
                            bounds
                        )));
                    }
                    self.validate_node(child)?;
                }
                Ok(())
            }
            Node::Leaf {
                level,
                bounds,
                entries,
            } => {
                if *level < self.max_levels() && entries.len() > self.max_points_per_node() {
                    return Err(violation(format!(
                        "leaf at level {} holds {} entries, capacity is {}",
                        level,
                        entries.len(),
                        self.max_points_per_node()
                    )));
                }

                for entry in entries.iter() {
                    if !bounds.contains(&entry.point) {
                        return Err(violation(format!(
                            "entry at {:?} lies outside its leaf {:?}",
                            entry.point, bounds
                        )));
                    }
                    if !std::ptr::eq(self.leaf_for(&entry.point), node) {
                        return Err(violation(format!(
                            "entry at {:?} is stored off its quadrant path",
                            entry.point
                        )));
                    }
                }
                Ok(())
            }
        }
    }

    /// Leaf reached by descending from the root along `point`'s quadrants.
    fn leaf_for(&self, point: &Point) -> &Node<P> {
        let mut node = self.root();
        while let Node::Branch {
            bounds, children, ..
        } = node
        {
            node = &children[Quadrant::select(bounds, point).index()];
        }
        node
    }
}

fn violation(message: String) -> QuadTreeError {
    QuadTreeError::InvariantViolation(message)
}
