//! Level-by-level drawing of a whole tree.

use super::traits::UiNode;
use crate::backend::Graphics;

/// Draw `root` one level at a time until it reports no deeper levels.
///
/// Sprites and then text are flushed after every level, so each level lands
/// on top of the previous one. At most `max_levels` levels are drawn.
///
/// Returns the number of levels drawn.
pub fn draw_levels(root: &mut dyn UiNode, gfx: &mut dyn Graphics, max_levels: u16) -> u16 {
    let mut level = 0u16;
    while level < max_levels {
        let more = root.draw(level, gfx);
        gfx.flush_sprites();
        gfx.flush_text();
        level += 1;
        if !more {
            return level;
        }
    }
    tracing::warn!(max_levels, "tree still drawing after level limit");
    level
}
