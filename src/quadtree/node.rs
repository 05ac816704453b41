//! Recursive node storage.
//!
//! A node is either a leaf holding entries or a branch owning exactly four
//! children. Branches never turn back into leaves.

use super::quadrant::{QUADRANTS, Quadrant};
use crate::geometry::{Point, Rect};
use smallvec::SmallVec;

/// Inline capacity of a leaf before its entries spill to the heap.
const LEAF_INLINE: usize = 4;

/// A stored point and its payload.
#[derive(Debug, Clone)]
pub(crate) struct Entry<P> {
    pub point: Point,
    pub payload: P,
}

/// Split limits shared by every node of a tree.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SplitPolicy {
    pub max_levels: u32,
    pub max_points_per_node: usize,
}

#[derive(Debug)]
pub(crate) enum Node<P> {
    Leaf {
        level: u32,
        bounds: Rect,
        /// Oldest first. Every reader walks it in reverse, newest first.
        entries: SmallVec<[Entry<P>; LEAF_INLINE]>,
    },
    Branch {
        level: u32,
        bounds: Rect,
        children: Box<[Node<P>; 4]>,
    },
}

/// Shape counters gathered by [`Node::collect_stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct NodeCounts {
    pub points: usize,
    pub nodes: usize,
    pub leaves: usize,
    pub max_level: u32,
}

impl<P> Node<P> {
    pub fn leaf(bounds: Rect, level: u32) -> Self {
        Node::Leaf {
            level,
            bounds,
            entries: SmallVec::new(),
        }
    }

    pub fn bounds(&self) -> &Rect {
        match self {
            Node::Leaf { bounds, .. } | Node::Branch { bounds, .. } => bounds,
        }
    }

    pub fn level(&self) -> u32 {
        match self {
            Node::Leaf { level, .. } | Node::Branch { level, .. } => *level,
        }
    }

    pub fn insert(&mut self, point: Point, payload: P, policy: SplitPolicy) {
        let should_split = match self {
            Node::Branch {
                bounds, children, ..
            } => {
                let quadrant = Quadrant::select(bounds, &point);
                children[quadrant.index()].insert(point, payload, policy);
                return;
            }
            Node::Leaf { level, entries, .. } => {
                entries.push(Entry { point, payload });
                *level < policy.max_levels && entries.len() > policy.max_points_per_node
            }
        };

        if should_split {
            self.split(policy);
        }
    }

    /// Turns a leaf into a branch and pushes its entries down through the
    /// normal insert path. Cascades when the entries crowd a single quadrant.
    fn split(&mut self, policy: SplitPolicy) {
        let Node::Leaf {
            level,
            bounds,
            entries,
        } = self
        else {
            return;
        };

        let level = *level;
        let bounds = *bounds;
        let entries = std::mem::take(entries);

        log::trace!(
            "Splitting node at level {} ({} entries, bounds {:?})",
            level,
            entries.len(),
            bounds
        );

        *self = Node::Branch {
            level,
            bounds,
            children: Box::new(QUADRANTS.map(|q| Node::leaf(bounds.quadrant(q), level + 1))),
        };

        for entry in entries.into_iter().rev() {
            self.insert(entry.point, entry.payload, policy);
        }
    }

    /// Follows the quadrant path of `point` to a single leaf and drops every
    /// entry there for which `predicate` holds.
    pub fn remove_where<F>(&mut self, point: &Point, predicate: &mut F) -> usize
    where
        F: FnMut(&Point, &P) -> bool,
    {
        match self {
            Node::Branch {
                bounds, children, ..
            } => {
                let quadrant = Quadrant::select(bounds, point);
                children[quadrant.index()].remove_where(point, predicate)
            }
            Node::Leaf { entries, .. } => {
                let before = entries.len();
                entries.retain(|entry| !predicate(&entry.point, &entry.payload));
                before - entries.len()
            }
        }
    }

    pub fn find<'a, F>(&'a self, query: &Rect, callback: &mut F) -> usize
    where
        F: FnMut(&'a Point, &'a P),
    {
        match self {
            Node::Branch { children, .. } => {
                let mut count = 0;
                for child in children.iter() {
                    if child.bounds().intersects(query) {
                        count += child.find(query, callback);
                    }
                }
                count
            }
            Node::Leaf { entries, .. } => {
                let mut count = 0;
                for entry in entries.iter().rev() {
                    if query.contains(&entry.point) {
                        count += 1;
                        callback(&entry.point, &entry.payload);
                    }
                }
                count
            }
        }
    }

    pub fn walk<F>(&self, callback: &mut F) -> usize
    where
        F: FnMut(&Point, &P),
    {
        match self {
            Node::Branch { children, .. } => {
                let mut count = 0;
                for child in children.iter() {
                    count += child.walk(callback);
                }
                count
            }
            Node::Leaf { entries, .. } => {
                for entry in entries.iter().rev() {
                    callback(&entry.point, &entry.payload);
                }
                entries.len()
            }
        }
    }

    pub fn collect_stats(&self, counts: &mut NodeCounts) {
        counts.nodes += 1;
        counts.max_level = counts.max_level.max(self.level());
        match self {
            Node::Branch { children, .. } => {
                for child in children.iter() {
                    child.collect_stats(counts);
                }
            }
            Node::Leaf { entries, .. } => {
                counts.leaves += 1;
                counts.points += entries.len();
            }
        }
    }
}

/// Depth-first iterator over entries in walk order.
pub struct Iter<'a, P> {
    stack: Vec<&'a Node<P>>,
    current: Option<std::iter::Rev<std::slice::Iter<'a, Entry<P>>>>,
}

impl<'a, P> Iter<'a, P> {
    pub(crate) fn new(root: &'a Node<P>) -> Self {
        Self {
            stack: vec![root],
            current: None,
        }
    }
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = (Point, &'a P);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.as_mut().and_then(|entries| entries.next()) {
                return Some((entry.point, &entry.payload));
            }

            match self.stack.pop()? {
                Node::Branch { children, .. } => {
                    // reversed so NW is popped first
                    self.stack.extend(children.iter().rev());
                    self.current = None;
                }
                Node::Leaf { entries, .. } => {
                    self.current = Some(entries.iter().rev());
                }
            }
        }
    }
}
