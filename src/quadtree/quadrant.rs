use crate::geometry::{Point, Rect};

/// One of the four equal sub-rectangles of a node's bounds.
///
/// "North" is the side with the smaller `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NW = 0,
    NE = 1,
    SW = 2,
    SE = 3,
}

/// Fixed child visitation order used by every traversal.
pub const QUADRANTS: [Quadrant; 4] = [Quadrant::NW, Quadrant::NE, Quadrant::SW, Quadrant::SE];

impl Quadrant {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_sides(right: bool, below: bool) -> Self {
        match (right, below) {
            (false, false) => Quadrant::NW,
            (true, false) => Quadrant::NE,
            (false, true) => Quadrant::SW,
            (true, true) => Quadrant::SE,
        }
    }

    /// `(right, below)` relative to the parent's midpoint.
    pub fn sides(self) -> (bool, bool) {
        match self {
            Quadrant::NW => (false, false),
            Quadrant::NE => (true, false),
            Quadrant::SW => (false, true),
            Quadrant::SE => (true, true),
        }
    }

    /// Quadrant of `bounds` that owns `point`.
    ///
    /// Points on a midline go to the lower-index side of that axis, so a point
    /// exactly at the center always lands in `NW`.
    pub fn select(bounds: &Rect, point: &Point) -> Self {
        let mid = bounds.mid();
        Self::from_sides(point.x > mid.x, point.y > mid.y)
    }
}
