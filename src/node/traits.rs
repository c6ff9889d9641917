//! The node trait shared by every layout container.

use crate::backend::{Graphics, InputQuery};
use crate::layout::{Point, Rect, Size};

/// One element of the layout tree.
///
/// A frame drives the tree in three steps: [`update`](UiNode::update) with
/// the frame's input, [`calculate_dimensions`](UiNode::calculate_dimensions)
/// from the root's world origin, then [`draw`](UiNode::draw) once per level
/// for as long as the root reports more levels.
pub trait UiNode {
    /// Lay out this node (and its subtree) at `world_pos`.
    ///
    /// Returns the node's rectangle in world coordinates.
    fn calculate_dimensions(&mut self, world_pos: Point) -> Rect;

    /// Draw this node at `level`.
    ///
    /// Returns `true` if the subtree has deeper levels left to draw.
    fn draw(&mut self, level: u16, gfx: &mut dyn Graphics) -> bool;

    /// Advance per-frame state from `input`.
    fn update(&mut self, input: &dyn InputQuery);

    /// Resize, letting the node reposition its children.
    fn set_size(&mut self, size: Size);

    /// Resize without repositioning children.
    fn set_size_only(&mut self, size: Size) {
        self.set_size(size);
    }

    /// Move the node within its parent.
    fn set_local_pos(&mut self, pos: Point);

    /// Rectangle in parent-relative coordinates.
    fn local_rect(&self) -> Rect;

    /// World offset from the last layout pass.
    fn world_pos(&self) -> Point;

    /// Rectangle in world coordinates as of the last layout pass.
    fn world_rect(&self) -> Rect {
        self.local_rect().translate(self.world_pos())
    }
}

impl std::fmt::Debug for dyn UiNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiNode")
            .field("local_rect", &self.local_rect())
            .field("world_pos", &self.world_pos())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::FixedContainer;

    #[test]
    fn test_boxed_node_debug() {
        let mut node: Box<dyn UiNode> = Box::new(FixedContainer::new(Rect::new(1, 2, 3, 4)));
        node.calculate_dimensions(Point::new(5, 5));
        assert_eq!(
            format!("{node:?}"),
            "UiNode { local_rect: Rect(1, 2 3x4), world_pos: (5, 5) }"
        );
    }
}
