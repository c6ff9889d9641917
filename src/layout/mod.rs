//! Layout module: Geometry primitives shared by every node.
//!
//! All layout math is done in signed cell coordinates. Conversion to the
//! unsigned terminal grid happens only at the `Surface` boundary.

mod axis;
mod rect;

pub use axis::Axis;
pub use rect::{Point, Rect, Size};
