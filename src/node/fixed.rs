//! Fixed container: a leaf with an authored rectangle.

use super::traits::UiNode;
use crate::backend::{Graphics, InputQuery};
use crate::buffer::Rgb;
use crate::layout::{Point, Rect, Size};

/// A leaf node whose rectangle is set by its owner.
///
/// It may paint a background and a one-line label; neither affects layout.
#[derive(Debug, Clone)]
pub struct FixedContainer {
    rect: Rect,
    world_pos: Point,
    fill: Option<Rgb>,
    label: Option<String>,
    label_fg: Rgb,
}

impl FixedContainer {
    /// Create a container occupying `rect` in parent coordinates.
    pub const fn new(rect: Rect) -> Self {
        Self {
            rect,
            world_pos: Point::ZERO,
            fill: None,
            label: None,
            label_fg: Rgb::WHITE,
        }
    }

    /// Builder: paint the rectangle with `color`.
    #[must_use]
    pub const fn with_fill(mut self, color: Rgb) -> Self {
        self.fill = Some(color);
        self
    }

    /// Builder: show `label` at the top-left corner.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>, fg: Rgb) -> Self {
        self.label = Some(label.into());
        self.label_fg = fg;
        self
    }

    /// Replace the label text.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    /// Current label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl UiNode for FixedContainer {
    fn calculate_dimensions(&mut self, world_pos: Point) -> Rect {
        self.world_pos = world_pos;
        self.rect.translate(world_pos)
    }

    fn draw(&mut self, _level: u16, gfx: &mut dyn Graphics) -> bool {
        let area = self.world_rect();
        if let Some(color) = self.fill {
            gfx.draw_background(area, color);
        }
        if let Some(label) = &self.label {
            gfx.draw_text(area.pos, label, self.label_fg);
        }
        false
    }

    fn update(&mut self, _input: &dyn InputQuery) {}

    fn set_size(&mut self, size: Size) {
        self.rect.size = size;
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
