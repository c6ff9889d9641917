//! Splitter: two children divided by a draggable boundary.
//!
//! The boundary sits at `split_percentage` of the splitter's extent along its
//! axis. Pressing the primary button within `split_region_pixels` of the
//! boundary starts a drag; while dragging, the percentage follows the pointer
//! every frame until the button is released.
//!
//! ```text
//! Horizontal, 30%
//! ┌─────────┬─────────────────────┐
//! │ first   ┊ second              │
//! │         ┊                     │
//! └─────────┴─────────────────────┘
//!          ◀┊▶ hit band, 2 × split_region_pixels wide
//! ```

use super::traits::UiNode;
use crate::backend::{Graphics, InputQuery};
use crate::layout::{Axis, Point, Rect, Size};

/// Configuration for a splitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitterConfig {
    /// Split direction: `Horizontal` puts the children side by side.
    pub axis: Axis,
    /// Fraction of the extent given to the first child.
    pub split_percentage: f32,
    /// Half-thickness of the band around the boundary that starts a drag.
    pub split_region_pixels: f32,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Horizontal,
            split_percentage: 0.5,
            split_region_pixels: 1.0,
        }
    }
}

/// A node that divides its rectangle between exactly two children.
pub struct Splitter {
    rect: Rect,
    world_pos: Point,
    axis: Axis,
    /// Not clamped: a drag may push it outside `[0, 1]`. Child extents are
    /// clamped instead.
    split_percentage: f32,
    split_region_pixels: f32,
    drag_active: bool,
    first: Box<dyn UiNode>,
    second: Box<dyn UiNode>,
}

impl Splitter {
    /// Create a splitter covering `rect` and size both children to fit.
    ///
    /// `config` is taken as given; [`Blueprint`](super::Blueprint) is the
    /// checked way to build one. A NaN percentage gives the first child no
    /// extent and a negative band never starts a drag.
    pub fn new(
        rect: Rect,
        config: SplitterConfig,
        first: Box<dyn UiNode>,
        second: Box<dyn UiNode>,
    ) -> Self {
        let mut splitter = Self {
            rect,
            world_pos: Point::ZERO,
            axis: config.axis,
            split_percentage: config.split_percentage,
            split_region_pixels: config.split_region_pixels,
            drag_active: false,
            first,
            second,
        };
        splitter.recalculate_split(false);
        splitter
    }

    /// Split direction.
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Current split fraction.
    pub const fn split_percentage(&self) -> f32 {
        self.split_percentage
    }

    /// Check if a drag is in progress.
    pub const fn is_dragging(&self) -> bool {
        self.drag_active
    }

    /// The first (left / top) child.
    pub fn first(&self) -> &dyn UiNode {
        &*self.first
    }

    /// The second (right / bottom) child.
    pub fn second(&self) -> &dyn UiNode {
        &*self.second
    }

    /// Move the boundary and resize both children in place.
    ///
    /// Child positions are left untouched until the next [`UiNode::set_size`]
    /// so that a drag does not jitter.
    pub fn set_split_percentage(&mut self, percentage: f32) {
        self.split_percentage = percentage;
        self.recalculate_split(true);
    }

    /// The world-space band that starts a drag when pressed.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn overlap_region(&self) -> Rect {
        let origin = self.rect.pos + self.world_pos;
        let boundary = self.axis.main(self.rect.size) as f32 * self.split_percentage;
        let start = (boundary - self.split_region_pixels).floor() as i32;
        let thickness = (self.split_region_pixels * 2.0) as i32;
        let cross = self.axis.cross(self.rect.size);

        Rect::from_parts(
            origin + self.axis.offset(start),
            self.axis.size(thickness, cross),
        )
    }

    /// Extent along the axis given to the first child.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn first_extent(&self) -> i32 {
        let total = self.axis.main(self.rect.size).max(0);
        ((total as f32 * self.split_percentage) as i32).clamp(0, total)
    }

    fn recalculate_split(&mut self, size_only: bool) {
        let total = self.axis.main(self.rect.size).max(0);
        let cross = self.axis.cross(self.rect.size);
        let first_extent = self.first_extent();
        let first_size = self.axis.size(first_extent, cross);
        let second_size = self.axis.size(total - first_extent, cross);

        if size_only {
            self.first.set_size_only(first_size);
            self.second.set_size_only(second_size);
        } else {
            self.first.set_local_pos(Point::ZERO);
            self.second.set_local_pos(self.axis.offset(first_extent));
            self.first.set_size(first_size);
            self.second.set_size(second_size);
        }
    }

    /// Follow the pointer while dragging.
    #[allow(clippy::cast_precision_loss)]
    fn drag_to(&mut self, pointer: Point) {
        let extent = self.axis.main(self.rect.size);
        if extent == 0 {
            return;
        }
        let origin = self.axis.coord(self.rect.pos + self.world_pos);
        let offset = self.axis.coord(pointer) - origin;
        self.set_split_percentage(offset as f32 / extent as f32);
    }
}

impl UiNode for Splitter {
    fn calculate_dimensions(&mut self, world_pos: Point) -> Rect {
        self.world_pos = world_pos;
        let anchor = self.rect.pos + world_pos;
        self.first.calculate_dimensions(anchor);
        self.second.calculate_dimensions(anchor);
        self.rect.translate(world_pos)
    }

    fn draw(&mut self, level: u16, gfx: &mut dyn Graphics) -> bool {
        let first = self.first.draw(level, gfx);
        let second = self.second.draw(level, gfx);
        first || second
    }

    fn update(&mut self, input: &dyn InputQuery) {
        let pointer = input.pointer_position();

        if !self.drag_active
            && input.primary_just_pressed()
            && self.overlap_region().contains_inclusive(pointer)
        {
            self.drag_active = true;
            tracing::debug!(?pointer, percentage = self.split_percentage, "splitter drag started");
        }

        if self.drag_active {
            self.drag_to(pointer);
            if input.primary_just_released() {
                self.drag_active = false;
                tracing::debug!(percentage = self.split_percentage, "splitter drag ended");
            }
        }

        self.first.update(input);
        self.second.update(input);
    }

    fn set_size(&mut self, size: Size) {
        self.rect.size = size;
        self.recalculate_split(false);
    }

    fn set_size_only(&mut self, size: Size) {
        self.rect.size = size;
        self.recalculate_split(true);
    }

    fn set_local_pos(&mut self, pos: Point) {
        self.rect.pos = pos;
    }

    fn local_rect(&self) -> Rect {
        self.rect
    }

    fn world_pos(&self) -> Point {
        self.world_pos
    }
}

impl std::fmt::Debug for Splitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Splitter")
            .field("rect", &self.rect)
            .field("axis", &self.axis)
            .field("split_percentage", &self.split_percentage)
            .field("drag_active", &self.drag_active)
            .finish_non_exhaustive()
    }
}
