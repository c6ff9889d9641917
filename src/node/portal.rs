//! Portal: a clipped, scrollable viewport around a single child.
//!
//! # Multi-pass drawing
//!
//! A portal resolves its whole subtree in one call. It narrows the viewport,
//! paints its background, then keeps drawing the child at increasing levels
//! until the child reports that nothing deeper is left, flushing after every
//! pass. From the parent's point of view a portal is always finished.

use super::traits::UiNode;
use crate::backend::{Graphics, InputQuery, ViewportGuard};
use crate::buffer::Rgb;
use crate::layout::{Point, Rect, Size};

/// Configuration for a portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortalConfig {
    /// Background color.
    pub color: Rgb,
    /// Upper bound on child draw passes per frame.
    pub max_passes: u16,
    /// Rows scrolled per wheel notch.
    pub scroll_step: i32,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            color: Rgb::new(24, 24, 32),
            max_passes: 64,
            scroll_step: 1,
        }
    }
}

/// A clipped viewport wrapping one child.
pub struct Portal {
    rect: Rect,
    world_pos: Point,
    config: PortalConfig,
    /// Content offset; the child is laid out this far up/left.
    scroll_offset: Point,
    child: Option<Box<dyn UiNode>>,
}

impl Portal {
    /// Create an empty portal covering `rect`.
    ///
    /// `config` is taken as given; [`Blueprint`](super::Blueprint) rejects
    /// `max_passes == 0`. Built directly, such a portal still draws its
    /// child once per frame.
    pub const fn new(rect: Rect, config: PortalConfig) -> Self {
        Self {
            rect,
            world_pos: Point::ZERO,
            config,
            scroll_offset: Point::ZERO,
            child: None,
        }
    }

    /// Builder: set the child.
    #[must_use]
    pub fn with_child(mut self, child: Box<dyn UiNode>) -> Self {
        self.child = Some(child);
        self
    }

    /// Replace the child, returning the previous one.
    pub fn set_child(&mut self, child: Box<dyn UiNode>) -> Option<Box<dyn UiNode>> {
        self.child.replace(child)
    }

    /// The child, if any.
    pub fn child(&self) -> Option<&dyn UiNode> {
        self.child.as_deref()
    }

    /// Background color.
    pub const fn color(&self) -> Rgb {
        self.config.color
    }

    /// Current content offset.
    pub const fn scroll_offset(&self) -> Point {
        self.scroll_offset
    }

    /// Scroll to `offset`, kept inside the content.
    pub fn scroll_to(&mut self, offset: Point) {
        let limit = self.scroll_limit();
        self.scroll_offset = Point::new(
            offset.x.clamp(0, limit.x),
            offset.y.clamp(0, limit.y),
        );
    }

    /// Furthest offset that still keeps content in view.
    fn scroll_limit(&self) -> Point {
        let content = self.child.as_ref().map_or(Size::ZERO, |c| c.local_rect().size);
        Point::new(
            (content.width - self.rect.size.width).max(0),
            (content.height - self.rect.size.height).max(0),
        )
    }
}

impl UiNode for Portal {
    fn calculate_dimensions(&mut self, world_pos: Point) -> Rect {
        self.world_pos = world_pos;
        let content_origin = self.rect.pos + world_pos - self.scroll_offset;
        if let Some(child) = self.child.as_mut() {
            child.calculate_dimensions(content_origin);
        }
        self.rect.translate(world_pos)
    }

    fn draw(&mut self, level: u16, gfx: &mut dyn Graphics) -> bool {
        let area = self.world_rect();
        let clip = gfx
            .viewport()
            .intersection(&area)
            .unwrap_or(Rect::from_parts(area.pos, Size::ZERO));
        let mut gfx = ViewportGuard::narrow(gfx, clip);

        gfx.draw_background(area, self.config.color);
        gfx.flush_sprites();

        let max_passes = self.config.max_passes;
        if let Some(child) = self.child.as_mut() {
            let mut level = level;
            let mut passes = 0u16;
            loop {
                let more = child.draw(level, &mut *gfx);
                level = level.saturating_add(1);
                passes += 1;
                gfx.flush_sprites();
                gfx.flush_text();
                if !more {
                    break;
                }
                if passes >= max_passes {
                    tracing::warn!(passes, ?area, "portal child still drawing, giving up");
                    break;
                }
            }
            tracing::trace!(passes, "portal drawn");
        }
        false
    }

    fn update(&mut self, input: &dyn InputQuery) {
        let delta = input.scroll_delta();
        if delta != 0 && self.world_rect().contains(input.pointer_position()) {
            let y = self.scroll_offset.y - delta * self.config.scroll_step;
            self.scroll_to(Point::new(self.scroll_offset.x, y));
        }
        if let Some(child) = self.child.as_mut() {
            child.update(input);
        }
    }

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

impl std::fmt::Debug for Portal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Portal")
            .field("rect", &self.rect)
            .field("config", &self.config)
            .field("scroll_offset", &self.scroll_offset)
            .field("has_child", &self.child.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ViewportState;
    use crate::buffer::Surface;
    use crate::layout::Axis;
    use crate::node::{DynamicBox, FixedContainer, Positioning};
    use std::cell::RefCell;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::rc::Rc;

    const BG: Rgb = Rgb::new(9, 9, 9);

    fn config() -> PortalConfig {
        PortalConfig {
            color: BG,
            ..PortalConfig::default()
        }
    }

    fn leaf(w: i32, h: i32) -> Box<dyn UiNode> {
        Box::new(FixedContainer::new(Rect::new(0, 0, w, h)))
    }

    /// Counts draw calls and asks for more until `depth` passes have run.
    struct Deep {
        depth: u16,
        calls: u16,
        viewports: Rc<RefCell<Vec<Rect>>>,
    }

    impl Deep {
        fn new(depth: u16) -> Self {
            Self {
                depth,
                calls: 0,
                viewports: Rc::default(),
            }
        }
    }

    impl UiNode for Deep {
        fn calculate_dimensions(&mut self, world_pos: Point) -> Rect {
            Rect::from_parts(world_pos, Size::ZERO)
        }

        fn draw(&mut self, _level: u16, gfx: &mut dyn Graphics) -> bool {
            self.calls += 1;
            self.viewports.borrow_mut().push(gfx.viewport());
            self.calls < self.depth
        }

        fn update(&mut self, _input: &dyn InputQuery) {}

        fn set_size(&mut self, _size: Size) {}

        fn set_local_pos(&mut self, _pos: Point) {}

        fn local_rect(&self) -> Rect {
            Rect::ZERO
        }

        fn world_pos(&self) -> Point {
            Point::ZERO
        }
    }

    struct Panics;

    impl UiNode for Panics {
        fn calculate_dimensions(&mut self, world_pos: Point) -> Rect {
            Rect::from_parts(world_pos, Size::ZERO)
        }

        fn draw(&mut self, _level: u16, _gfx: &mut dyn Graphics) -> bool {
            panic!("child draw failed");
        }

        fn update(&mut self, _input: &dyn InputQuery) {}

        fn set_size(&mut self, _size: Size) {}

        fn set_local_pos(&mut self, _pos: Point) {}

        fn local_rect(&self) -> Rect {
            Rect::ZERO
        }

        fn world_pos(&self) -> Point {
            Point::ZERO
        }
    }

    struct Wheel {
        pointer: Point,
        delta: i32,
    }

    impl InputQuery for Wheel {
        fn pointer_position(&self) -> Point {
            self.pointer
        }

        fn primary_just_pressed(&self) -> bool {
            false
        }

        fn primary_just_released(&self) -> bool {
            false
        }

        fn scroll_delta(&self) -> i32 {
            self.delta
        }
    }

    #[test]
    fn test_portal_is_always_finished() {
        let mut portal = Portal::new(Rect::new(0, 0, 4, 4), config()).with_child(leaf(2, 2));
        let mut surface = Surface::new(8, 8);
        portal.calculate_dimensions(Point::ZERO);
        assert!(!portal.draw(0, &mut surface));
    }

    #[test]
    fn test_background_clipped_and_viewport_restored() {
        let mut portal = Portal::new(Rect::new(2, 1, 3, 2), config());
        let mut surface = Surface::new(8, 4);
        portal.calculate_dimensions(Point::new(1, 0));
        portal.draw(0, &mut surface);

        assert_eq!(surface.get(3, 1).unwrap().bg(), BG);
        assert_eq!(surface.get(5, 2).unwrap().bg(), BG);
        assert_eq!(surface.get(6, 1).unwrap().bg(), Rgb::BLACK);
        assert_eq!(surface.viewport(), surface.bounds());
    }

    #[test]
    fn test_child_sees_narrowed_viewport() {
        let deep = Deep::new(2);
        let viewports = Rc::clone(&deep.viewports);
        let mut portal = Portal::new(Rect::new(1, 1, 3, 3), config()).with_child(Box::new(deep));
        let mut surface = Surface::new(8, 8);
        portal.calculate_dimensions(Point::ZERO);
        portal.draw(0, &mut surface);

        assert_eq!(*viewports.borrow(), vec![Rect::new(1, 1, 3, 3); 2]);
        assert_eq!(surface.viewport(), Rect::new(0, 0, 8, 8));
    }

    #[test]
    fn test_loop_runs_until_child_finishes() {
        let mut portal = Portal::new(Rect::new(0, 0, 4, 4), config()).with_child(Box::new(Deep::new(5)));
        let mut surface = Surface::new(8, 8);
        portal.draw(0, &mut surface);

        // One background flush, then a sprite and text flush per pass
        let stats = surface.stats();
        assert_eq!(stats.sprite_flushes, 1 + 5);
        assert_eq!(stats.text_flushes, 5);
    }

    #[test]
    fn test_loop_bounded_by_max_passes() {
        let config = PortalConfig {
            max_passes: 3,
            ..config()
        };
        let mut portal = Portal::new(Rect::new(0, 0, 4, 4), config).with_child(Box::new(Deep::new(u16::MAX)));
        let mut surface = Surface::new(8, 8);
        portal.draw(0, &mut surface);
        assert_eq!(surface.stats().text_flushes, 3);
    }

    #[test]
    fn test_zero_max_passes_still_draws_once() {
        let config = PortalConfig {
            max_passes: 0,
            ..config()
        };
        let mut portal = Portal::new(Rect::new(0, 0, 4, 4), config).with_child(Box::new(Deep::new(u16::MAX)));
        let mut surface = Surface::new(8, 8);
        assert!(!portal.draw(0, &mut surface));
        assert_eq!(surface.stats().text_flushes, 1);
    }

    #[test]
    fn test_nested_boxes_terminate_within_depth() {
        let inner = DynamicBox::new(Axis::Vertical).with_child(leaf(2, 2), Positioning::Dynamic);
        let outer = DynamicBox::new(Axis::Horizontal)
            .with_child(Box::new(inner), Positioning::Dynamic)
            .with_child(leaf(1, 1), Positioning::Dynamic);
        let mut portal = Portal::new(Rect::new(0, 0, 6, 6), config()).with_child(Box::new(outer));
        let mut surface = Surface::new(8, 8);

        for _ in 0..3 {
            let before = surface.stats().text_flushes;
            portal.calculate_dimensions(Point::ZERO);
            portal.draw(0, &mut surface);
            let passes = surface.stats().text_flushes - before;
            assert!(passes <= 3, "took {passes} passes");
        }
    }

    #[test]
    fn test_viewport_restored_after_child_panic() {
        let mut portal = Portal::new(Rect::new(1, 1, 2, 2), config()).with_child(Box::new(Panics));
        let mut surface = Surface::new(8, 8);
        portal.calculate_dimensions(Point::ZERO);

        let result = catch_unwind(AssertUnwindSafe(|| portal.draw(0, &mut surface)));
        assert!(result.is_err());
        assert_eq!(surface.viewport(), Rect::new(0, 0, 8, 8));
    }

    #[test]
    fn test_nested_portal_clip_stays_inside_parent() {
        let inner = Portal::new(Rect::new(2, 0, 10, 2), config());
        let mut outer = Portal::new(Rect::new(0, 0, 4, 4), PortalConfig::default())
            .with_child(Box::new(inner));
        let mut surface = Surface::new(8, 8);
        outer.calculate_dimensions(Point::ZERO);
        outer.draw(0, &mut surface);

        assert_eq!(surface.get(3, 0).unwrap().bg(), BG);
        assert_eq!(surface.get(4, 0).unwrap().bg(), Rgb::BLACK);
    }

    #[test]
    fn test_wheel_scrolls_content() {
        let content = DynamicBox::new(Axis::Vertical)
            .with_child(leaf(4, 6), Positioning::Dynamic)
            .with_child(leaf(4, 6), Positioning::Dynamic);
        let mut portal = Portal::new(Rect::new(0, 0, 4, 4), config()).with_child(Box::new(content));
        portal.calculate_dimensions(Point::ZERO);

        portal.update(&Wheel {
            pointer: Point::new(1, 1),
            delta: -3,
        });
        assert_eq!(portal.scroll_offset(), Point::new(0, 3));
        portal.calculate_dimensions(Point::ZERO);
        assert_eq!(portal.child().unwrap().world_rect().pos, Point::new(0, -3));

        // Never past the end of the content
        portal.update(&Wheel {
            pointer: Point::new(1, 1),
            delta: -100,
        });
        assert_eq!(portal.scroll_offset(), Point::new(0, 8));

        // Pointer outside: ignored
        portal.update(&Wheel {
            pointer: Point::new(7, 7),
            delta: 5,
        });
        assert_eq!(portal.scroll_offset(), Point::new(0, 8));
    }
}
