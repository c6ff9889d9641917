//! Dynamic box: stacks children along an axis and grows to fit them.
//!
//! # Layout
//!
//! A box has two child lists:
//!
//! - **relative** children are laid out at the box's anchor and only widen
//!   its bounding box;
//! - **dynamic** children are placed one after another along the box's
//!   [`Axis`], each starting where the previous one ended.
//!
//! ```text
//! Horizontal box
//! ┌──────────┬──────────────────────────────┐
//! │ dyn #0   │ dyn #1                       │
//! │ 10x20    ├──────────────────────────────┘  size = 40x20
//! │          │ 30x5
//! └──────────┘
//! ```
//!
//! The box's own size is the total advance along the axis by the largest
//! cross extent, merged with the relative children's bounds.

use super::traits::UiNode;
use crate::backend::{Graphics, InputQuery};
use crate::layout::{Axis, Point, Rect, Size};

/// Which child list a child joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Positioning {
    /// Stacked after the previous dynamic child.
    Dynamic,
    /// Placed at the box anchor; only affects the bounding box.
    Relative,
}

/// A container whose size is derived from its children.
pub struct DynamicBox {
    axis: Axis,
    /// Authored position inside the parent; children are anchored here.
    origin: Point,
    /// Merged bounds from the last layout pass, parent-relative.
    rect: Rect,
    world_pos: Point,
    /// Last draw level seen.
    level: u16,
    laid_out: bool,
    relative_children: Vec<Box<dyn UiNode>>,
    dynamic_children: Vec<Box<dyn UiNode>>,
}

impl DynamicBox {
    /// Create an empty box stacking along `axis`.
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            origin: Point::ZERO,
            rect: Rect::ZERO,
            world_pos: Point::ZERO,
            level: 0,
            laid_out: false,
            relative_children: Vec::new(),
            dynamic_children: Vec::new(),
        }
    }

    /// Builder: add a child.
    #[must_use]
    pub fn with_child(mut self, child: Box<dyn UiNode>, positioning: Positioning) -> Self {
        self.add_child(child, positioning);
        self
    }

    /// Append a child to the list selected by `positioning`.
    pub fn add_child(&mut self, child: Box<dyn UiNode>, positioning: Positioning) {
        match positioning {
            Positioning::Dynamic => self.dynamic_children.push(child),
            Positioning::Relative => self.relative_children.push(child),
        }
    }

    /// Stacking axis.
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Number of relative children.
    pub fn relative_len(&self) -> usize {
        self.relative_children.len()
    }

    /// Number of dynamic children.
    pub fn dynamic_len(&self) -> usize {
        self.dynamic_children.len()
    }

    /// Check if the box has been laid out at least once.
    pub const fn is_laid_out(&self) -> bool {
        self.laid_out
    }
}

impl UiNode for DynamicBox {
    fn calculate_dimensions(&mut self, world_pos: Point) -> Rect {
        self.world_pos = world_pos;
        self.laid_out = true;
        let anchor = self.origin + world_pos;

        let mut relative_bounds: Option<Rect> = None;
        for child in &mut self.relative_children {
            let child_rect = child.calculate_dimensions(anchor);
            relative_bounds = Some(relative_bounds.map_or(child_rect, |b| b.union(&child_rect)));
        }

        let mut offset = anchor;
        let mut cross = 0;
        for child in &mut self.dynamic_children {
            let size = child.calculate_dimensions(offset).size;
            offset = offset + self.axis.offset(self.axis.main(size));
            cross = cross.max(self.axis.cross(size));
        }
        let advance = self.axis.coord(offset) - self.axis.coord(anchor);

        let mut rect = Rect::from_parts(self.origin, self.axis.size(advance, cross));
        if let Some(bounds) = relative_bounds {
            rect = rect.union(&bounds.translate(Point::ZERO - world_pos));
        }
        self.rect = rect;

        tracing::trace!(?rect, ?world_pos, "dynamic box laid out");
        rect.translate(world_pos)
    }

    fn draw(&mut self, level: u16, gfx: &mut dyn Graphics) -> bool {
        if level <= self.level {
            // Fresh pass at this depth: make sure there is something to draw,
            // then ask the caller for another level.
            if !self.laid_out {
                self.calculate_dimensions(Point::ZERO);
            }
            self.level = level;
            return true;
        }

        self.level = level;
        let mut more = false;
        for child in self
            .relative_children
            .iter_mut()
            .chain(self.dynamic_children.iter_mut())
        {
            more |= child.draw(level, gfx);
        }
        more
    }

    fn update(&mut self, input: &dyn InputQuery) {
        for child in &mut self.dynamic_children {
            child.update(input);
        }
        for child in &mut self.relative_children {
            child.update(input);
        }
    }

    fn set_size(&mut self, size: Size) {
        // Size is derived from the children
        tracing::trace!(?size, "ignoring set_size on dynamic box");
    }

    fn set_local_pos(&mut self, pos: Point) {
        let delta = pos - self.origin;
        self.origin = pos;
        self.rect = self.rect.translate(delta);
    }

    fn local_rect(&self) -> Rect {
        self.rect
    }

    fn world_pos(&self) -> Point {
        self.world_pos
    }
}

impl std::fmt::Debug for DynamicBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicBox")
            .field("axis", &self.axis)
            .field("rect", &self.rect)
            .field("world_pos", &self.world_pos)
            .field("relative", &self.relative_children.len())
            .field("dynamic", &self.dynamic_children.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{Rgb, Surface};
    use crate::node::{FixedContainer, Splitter, SplitterConfig};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Pointer {
        at: Point,
        pressed: bool,
    }

    impl InputQuery for Pointer {
        fn pointer_position(&self) -> Point {
            self.at
        }

        fn primary_just_pressed(&self) -> bool {
            self.pressed
        }

        fn primary_just_released(&self) -> bool {
            false
        }
    }

    /// Leaf that appends its name to a shared log on every update.
    struct Tagged {
        name: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl UiNode for Tagged {
        fn calculate_dimensions(&mut self, world_pos: Point) -> Rect {
            Rect::from_parts(world_pos, Size::ZERO)
        }

        fn draw(&mut self, _level: u16, _gfx: &mut dyn Graphics) -> bool {
            false
        }

        fn update(&mut self, _input: &dyn InputQuery) {
            self.log.borrow_mut().push(self.name);
        }

        fn set_size(&mut self, _size: Size) {}

        fn set_local_pos(&mut self, _pos: Point) {}

        fn local_rect(&self) -> Rect {
            Rect::ZERO
        }

        fn world_pos(&self) -> Point {
            Point::ZERO
        }
    }

    fn fixed(x: i32, y: i32, w: i32, h: i32) -> Box<dyn UiNode> {
        Box::new(FixedContainer::new(Rect::new(x, y, w, h)))
    }

    #[test]
    fn test_horizontal_stack() {
        let mut dbox = DynamicBox::new(Axis::Horizontal)
            .with_child(fixed(0, 0, 10, 20), Positioning::Dynamic)
            .with_child(fixed(0, 0, 30, 5), Positioning::Dynamic);

        let rect = dbox.calculate_dimensions(Point::ZERO);
        assert_eq!(rect, Rect::new(0, 0, 40, 20));
    }

    #[test]
    fn test_vertical_stack_positions_children() {
        let mut dbox = DynamicBox::new(Axis::Vertical)
            .with_child(fixed(0, 0, 10, 3), Positioning::Dynamic)
            .with_child(fixed(0, 0, 4, 2), Positioning::Dynamic);

        let rect = dbox.calculate_dimensions(Point::new(5, 1));
        assert_eq!(rect, Rect::new(5, 1, 10, 5));
        assert_eq!(dbox.dynamic_children[1].world_rect(), Rect::new(5, 4, 4, 2));
    }

    #[test]
    fn test_empty_box_is_zero_sized_at_world_pos() {
        let mut dbox = DynamicBox::new(Axis::Horizontal);
        let rect = dbox.calculate_dimensions(Point::new(3, 7));
        assert_eq!(rect, Rect::new(3, 7, 0, 0));
    }

    #[test]
    fn test_relative_children_widen_bounds() {
        let mut dbox = DynamicBox::new(Axis::Horizontal)
            .with_child(fixed(0, 0, 10, 2), Positioning::Dynamic)
            .with_child(fixed(0, 0, 5, 8), Positioning::Relative);

        let rect = dbox.calculate_dimensions(Point::new(1, 1));
        assert_eq!(rect, Rect::new(1, 1, 10, 8));
    }

    #[test]
    fn test_relative_child_above_anchor() {
        let mut dbox = DynamicBox::new(Axis::Horizontal)
            .with_child(fixed(0, 0, 4, 4), Positioning::Dynamic)
            .with_child(fixed(-2, -3, 2, 2), Positioning::Relative);

        let rect = dbox.calculate_dimensions(Point::new(10, 10));
        assert_eq!(rect, Rect::new(8, 7, 6, 7));
        assert_eq!(dbox.local_rect(), Rect::new(-2, -3, 6, 7));
    }

    #[test]
    fn test_layout_is_idempotent() {
        let mut dbox = DynamicBox::new(Axis::Vertical)
            .with_child(fixed(0, 0, 4, 4), Positioning::Dynamic)
            .with_child(fixed(-2, -3, 2, 2), Positioning::Relative);

        let first = dbox.calculate_dimensions(Point::new(2, 2));
        let second = dbox.calculate_dimensions(Point::new(2, 2));
        assert_eq!(first, second);
    }

    #[test]
    fn test_nested_boxes() {
        let inner = DynamicBox::new(Axis::Vertical)
            .with_child(fixed(0, 0, 3, 3), Positioning::Dynamic)
            .with_child(fixed(0, 0, 3, 3), Positioning::Dynamic);
        let mut outer = DynamicBox::new(Axis::Horizontal)
            .with_child(fixed(0, 0, 2, 1), Positioning::Dynamic)
            .with_child(Box::new(inner), Positioning::Dynamic);

        assert_eq!(outer.calculate_dimensions(Point::ZERO), Rect::new(0, 0, 5, 6));
    }

    #[test]
    fn test_local_pos_shifts_layout() {
        let mut dbox =
            DynamicBox::new(Axis::Horizontal).with_child(fixed(0, 0, 3, 3), Positioning::Dynamic);
        dbox.set_local_pos(Point::new(4, 0));
        assert_eq!(dbox.calculate_dimensions(Point::new(1, 1)), Rect::new(5, 1, 3, 3));
    }

    #[test]
    fn test_set_size_is_ignored() {
        let mut dbox =
            DynamicBox::new(Axis::Horizontal).with_child(fixed(0, 0, 3, 3), Positioning::Dynamic);
        dbox.calculate_dimensions(Point::ZERO);
        dbox.set_size(Size::new(50, 50));
        assert_eq!(dbox.local_rect().size, Size::new(3, 3));
    }

    #[test]
    fn test_first_draw_lays_out_and_asks_for_more() {
        let mut dbox =
            DynamicBox::new(Axis::Horizontal).with_child(fixed(0, 0, 3, 3), Positioning::Dynamic);
        let mut surface = Surface::new(10, 10);

        assert!(!dbox.is_laid_out());
        assert!(dbox.draw(0, &mut surface));
        assert!(dbox.is_laid_out());
        assert_eq!(dbox.local_rect(), Rect::new(0, 0, 3, 3));

        // Next level descends into the leaf, which is done
        assert!(!dbox.draw(1, &mut surface));
    }

    #[test]
    fn test_draw_reaches_every_child() {
        let red = Rgb::new(200, 0, 0);
        let mut dbox = DynamicBox::new(Axis::Horizontal)
            .with_child(
                Box::new(FixedContainer::new(Rect::new(0, 0, 1, 1)).with_fill(red)),
                Positioning::Dynamic,
            )
            .with_child(
                Box::new(FixedContainer::new(Rect::new(0, 0, 1, 1)).with_fill(red)),
                Positioning::Dynamic,
            );
        let mut surface = Surface::new(4, 1);
        dbox.calculate_dimensions(Point::ZERO);
        dbox.draw(0, &mut surface);
        dbox.draw(1, &mut surface);
        crate::backend::DrawTarget::flush_sprites(&mut surface);

        assert_eq!(surface.get(0, 0).unwrap().bg(), red);
        assert_eq!(surface.get(1, 0).unwrap().bg(), red);
        assert_eq!(surface.get(2, 0).unwrap().bg(), Rgb::BLACK);
    }

    #[test]
    fn test_update_visits_dynamic_then_relative() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let tagged = |name: &'static str| -> Box<dyn UiNode> {
            Box::new(Tagged {
                name,
                log: Rc::clone(&log),
            })
        };
        let mut dbox = DynamicBox::new(Axis::Horizontal)
            .with_child(tagged("rel-a"), Positioning::Relative)
            .with_child(tagged("dyn-a"), Positioning::Dynamic)
            .with_child(tagged("rel-b"), Positioning::Relative)
            .with_child(tagged("dyn-b"), Positioning::Dynamic);

        dbox.update(&Pointer {
            at: Point::ZERO,
            pressed: false,
        });
        assert_eq!(*log.borrow(), vec!["dyn-a", "dyn-b", "rel-a", "rel-b"]);
    }

    #[test]
    fn test_update_starts_drag_in_stacked_splitter() {
        let red = Rgb::new(200, 0, 0);
        let split = Splitter::new(
            Rect::new(0, 0, 20, 1),
            SplitterConfig::default(),
            Box::new(FixedContainer::new(Rect::ZERO).with_fill(red)),
            fixed(0, 0, 0, 0),
        );
        let mut dbox = DynamicBox::new(Axis::Horizontal)
            .with_child(fixed(0, 0, 5, 1), Positioning::Dynamic)
            .with_child(Box::new(split), Positioning::Dynamic);
        dbox.calculate_dimensions(Point::ZERO);
        assert_eq!(dbox.dynamic_children[1].world_rect(), Rect::new(5, 0, 20, 1));

        // Splitter sits at x = 5, so its boundary is at x = 15
        dbox.update(&Pointer {
            at: Point::new(15, 0),
            pressed: true,
        });
        dbox.update(&Pointer {
            at: Point::new(10, 0),
            pressed: false,
        });

        dbox.calculate_dimensions(Point::ZERO);
        let mut surface = Surface::new(30, 1);
        crate::node::draw_levels(&mut dbox, &mut surface, 8);
        assert_eq!(surface.get(9, 0).unwrap().bg(), red);
        assert_eq!(surface.get(10, 0).unwrap().bg(), Rgb::BLACK);
    }
}
