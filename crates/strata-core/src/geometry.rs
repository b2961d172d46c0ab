//! Geometric primitives for placed segments.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in container space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangle defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Strata uses the same coordinate system as SVG and CSS absolute
//! positioning inside a segment container:
//!
//! ```text
//!   (0,0) ────────► +X  (timeline axis, `left`/`right`)
//!     │
//!     │
//!     ▼
//!    +Y  (stacking axis, `top`)
//! ```
//!
//! A placed segment's `top` is the distance from the container's top edge,
//! so stacking deeper means increasing Y.

/// A 2D point in container coordinate space.
///
/// # Examples
///
/// ```
/// # use strata_core::geometry::Point;
/// let p = Point::new(10.0, 20.0);
/// assert_eq!(p.x(), 10.0);
/// assert_eq!(p.y(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Converts a top-left point and a size into a bounds rectangle
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_top_left(self, size)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates.
///
/// Edges are treated as half-open: a rectangle covers `[min, max)` on both
/// axes, so two rectangles that only share an edge do not intersect.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from its four edges
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Returns `true` if the horizontal ranges of both bounds overlap.
    pub fn overlaps_horizontally(&self, other: &Self) -> bool {
        self.min_x < other.max_x && self.max_x > other.min_x
    }

    /// Returns `true` if the vertical ranges of both bounds overlap.
    pub fn overlaps_vertically(&self, other: &Self) -> bool {
        self.min_y < other.max_y && self.max_y > other.min_y
    }

    /// Returns `true` if the two rectangles share any interior area.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_core::geometry::{Bounds, Point, Size};
    /// let a = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 20.0));
    /// let below = Bounds::new_from_top_left(Point::new(5.0, 20.0), Size::new(10.0, 30.0));
    /// let overlapping = Bounds::new_from_top_left(Point::new(5.0, 10.0), Size::new(10.0, 30.0));
    ///
    /// assert!(!a.intersects(&below)); // shares only an edge
    /// assert!(a.intersects(&overlapping));
    /// ```
    pub fn intersects(&self, other: &Self) -> bool {
        self.overlaps_horizontally(other) && self.overlaps_vertically(other)
    }
}
