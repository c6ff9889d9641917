//! Capability traits consumed by the layout tree.
//!
//! Nodes never talk to a terminal directly. They issue draw calls, narrow the
//! viewport and poll pointer state through these traits, so a tree can be
//! driven by the terminal `Surface` or by anything else that implements them.

use crate::buffer::Rgb;
use crate::layout::{Point, Rect};

/// Issues and flushes draw calls.
pub trait DrawTarget {
    /// Queue a solid background fill.
    fn draw_background(&mut self, rect: Rect, color: Rgb);

    /// Queue a run of text starting at `pos`.
    fn draw_text(&mut self, pos: Point, text: &str, fg: Rgb);

    /// Apply all queued background fills.
    fn flush_sprites(&mut self);

    /// Apply all queued text runs.
    fn flush_text(&mut self);
}

/// Reads and writes the single active viewport.
pub trait ViewportState {
    /// The active viewport.
    fn viewport(&self) -> Rect;

    /// Replace the active viewport.
    fn set_viewport(&mut self, viewport: Rect);
}

/// Everything a node needs while drawing.
pub trait Graphics: DrawTarget + ViewportState {}

impl<T: DrawTarget + ViewportState + ?Sized> Graphics for T {}

/// Pointer state for the current frame.
pub trait InputQuery {
    /// Pointer position in cell coordinates.
    fn pointer_position(&self) -> Point;

    /// The primary button went down this frame.
    fn primary_just_pressed(&self) -> bool;

    /// The primary button went up this frame.
    fn primary_just_released(&self) -> bool;

    /// Accumulated wheel movement this frame (positive = up).
    fn scroll_delta(&self) -> i32 {
        0
    }
}
