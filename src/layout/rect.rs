//! Rect: Integer geometry primitives for layout calculations.
//!
//! Coordinates are signed so that relative children may sit above or to the
//! left of their anchor, and so that scrolled content may start off-screen.

use std::ops::{Add, Sub};

/// A point in cell coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise minimum.
    #[inline]
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    #[inline]
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A width/height pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width in columns.
    pub width: i32,
    /// Height in rows.
    pub height: i32,
}

impl Size {
    /// Zero extent.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero or negative.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl std::fmt::Debug for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A rectangle defined by position and size.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Top-left corner.
    pub pos: Point,
    /// Extent.
    pub size: Size,
}

impl Rect {
    /// Zero-sized rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Create a rectangle from a position and a size.
    #[inline]
    pub const fn from_parts(pos: Point, size: Size) -> Self {
        Self { pos, size }
    }

    /// Create a rectangle spanning two corners (`max` exclusive).
    ///
    /// Inverted corners collapse to a zero extent at `min`.
    #[inline]
    pub fn from_corners(min: Point, max: Point) -> Self {
        Self::from_parts(
            min,
            Size::new((max.x - min.x).max(0), (max.y - min.y).max(0)),
        )
    }

    /// Create a rectangle from a terminal size (full screen).
    #[inline]
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Get the area (number of cells).
    #[inline]
    #[allow(clippy::cast_sign_loss)]
    pub const fn area(&self) -> u64 {
        if self.size.is_empty() {
            return 0;
        }
        (self.size.width as u64) * (self.size.height as u64)
    }

    /// Check if the rectangle is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Get the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.pos.x.saturating_add(self.size.width)
    }

    /// Get the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.pos.y.saturating_add(self.size.height)
    }

    /// Bottom-right corner (exclusive).
    #[inline]
    pub const fn max_corner(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// Check if a point is inside the rectangle (right/bottom edges excluded).
    #[inline]
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.pos.x && p.x < self.right() && p.y >= self.pos.y && p.y < self.bottom()
    }

    /// Check if a point is inside the rectangle, counting every edge.
    ///
    /// Hit bands use this so a band of thickness `2r` reaches exactly `r`
    /// cells on either side of its center line.
    #[inline]
    pub const fn contains_inclusive(&self, p: Point) -> bool {
        p.x >= self.pos.x && p.x <= self.right() && p.y >= self.pos.y && p.y <= self.bottom()
    }

    /// Check if this rectangle intersects with another.
    #[inline]
    pub const fn intersects(&self, other: &Self) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }

    /// Overlapping region of two rectangles, or `None` if they are disjoint.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }
        Some(Self::from_corners(
            self.pos.max(other.pos),
            self.max_corner().min(other.max_corner()),
        ))
    }

    /// Smallest rectangle covering both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::from_corners(
            self.pos.min(other.pos),
            self.max_corner().max(other.max_corner()),
        )
    }

    /// Move the rectangle by an offset.
    #[inline]
    #[must_use]
    pub fn translate(&self, offset: Point) -> Self {
        Self::from_parts(self.pos + offset, self.size)
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect({}, {} {}x{})",
            self.pos.x, self.pos.y, self.size.width, self.size.height
        )
    }
}
