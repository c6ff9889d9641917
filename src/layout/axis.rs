//! Axis: The direction along which a container stacks or splits.

use super::rect::{Point, Size};

/// Stacking / split direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Left to right, along x.
    #[default]
    Horizontal,
    /// Top to bottom, along y.
    Vertical,
}

impl Axis {
    /// Extent of `size` along this axis.
    #[inline]
    pub const fn main(self, size: Size) -> i32 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Extent of `size` across this axis.
    #[inline]
    pub const fn cross(self, size: Size) -> i32 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    /// Coordinate of `point` along this axis.
    #[inline]
    pub const fn coord(self, point: Point) -> i32 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// Build a size from main and cross extents.
    #[inline]
    pub const fn size(self, main: i32, cross: i32) -> Size {
        match self {
            Self::Horizontal => Size::new(main, cross),
            Self::Vertical => Size::new(cross, main),
        }
    }

    /// Build an offset that moves `main` cells along this axis.
    #[inline]
    pub const fn offset(self, main: i32) -> Point {
        match self {
            Self::Horizontal => Point::new(main, 0),
            Self::Vertical => Point::new(0, main),
        }
    }
}
