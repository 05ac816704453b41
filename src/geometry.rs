//! Planar points and axis-aligned rectangles.
//!
//! Both predicates treat rectangle edges as inclusive: a point lying exactly on
//! an edge shared by two rectangles is contained by both, and rectangles that
//! merely touch are considered intersecting.

use crate::quadtree::Quadrant;
use serde::{Deserialize, Serialize};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// An axis-aligned rectangle.
///
/// Built from an origin (minimum corner) and a size, but stored as its two
/// corners. Quadrants share their parent's corners and midpoint exactly, so
/// the four children of a node tile it with no gap at the far edges.
///
/// # Example
///
/// ```rust
/// use spatio_quadtree::{Point, Rect};
///
/// let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
/// assert!(rect.contains(&Point::new(10.0, 0.0)));
/// assert!(rect.intersects(&Rect::new(10.0, 10.0, 5.0, 5.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RectRepr", into = "RectRepr")]
pub struct Rect {
    min: Point,
    max: Point,
}

/// Serialized form of [`Rect`].
#[derive(Serialize, Deserialize)]
struct RectRepr {
    origin: Point,
    width: f64,
    height: f64,
}

impl From<RectRepr> for Rect {
    fn from(repr: RectRepr) -> Self {
        Rect::new(repr.origin.x, repr.origin.y, repr.width, repr.height)
    }
}

impl From<Rect> for RectRepr {
    fn from(rect: Rect) -> Self {
        RectRepr {
            origin: rect.origin(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            min: Point::new(x, y),
            max: Point::new(x + width, y + height),
        }
    }

    /// Rectangle spanning `min..=max`.
    pub const fn from_corners(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Minimum corner.
    pub fn origin(&self) -> Point {
        self.min
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn min_x(&self) -> f64 {
        self.min.x
    }

    pub fn min_y(&self) -> f64 {
        self.min.y
    }

    pub fn max_x(&self) -> f64 {
        self.max.x
    }

    pub fn max_y(&self) -> f64 {
        self.max.y
    }

    /// Center of the rectangle; the split point for its quadrants.
    pub fn mid(&self) -> Point {
        Point::new(
            self.min.x + (self.max.x - self.min.x) / 2.0,
            self.min.y + (self.max.y - self.min.y) / 2.0,
        )
    }

    /// True if every coordinate is finite. Does not look at the orientation.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// True if the rectangle can serve as tree bounds: finite with a strictly
    /// positive width and height.
    pub fn is_valid(&self) -> bool {
        self.is_finite() && self.max.x > self.min.x && self.max.y > self.min.y
    }

    /// Inclusive point containment.
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Inclusive separating-axis test: only a strict gap on either axis
    /// separates two rectangles.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y)
    }

    /// The quarter of this rectangle named by `quadrant`, split at [`Rect::mid`].
    pub fn quadrant(&self, quadrant: Quadrant) -> Rect {
        let mid = self.mid();
        let (right, below) = quadrant.sides();
        let (min_x, max_x) = if right {
            (mid.x, self.max.x)
        } else {
            (self.min.x, mid.x)
        };
        let (min_y, max_y) = if below {
            (mid.y, self.max.y)
        } else {
            (self.min.y, mid.y)
        };
        Rect::from_corners(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<geo::Coord<f64>> for Point {
    fn from(coord: geo::Coord<f64>) -> Self {
        Self::new(coord.x, coord.y)
    }
}

impl From<geo::Point<f64>> for Point {
    fn from(point: geo::Point<f64>) -> Self {
        Self::new(point.x(), point.y())
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(point: Point) -> Self {
        geo::Point::new(point.x, point.y)
    }
}

impl From<geo::Rect<f64>> for Rect {
    fn from(rect: geo::Rect<f64>) -> Self {
        Self::from_corners(rect.min().into(), rect.max().into())
    }
}

impl From<Rect> for geo::Rect<f64> {
    fn from(rect: Rect) -> Self {
        geo::Rect::new(
            geo::coord! { x: rect.min_x(), y: rect.min_y() },
            geo::coord! { x: rect.max_x(), y: rect.max_y() },
        )
    }
}
