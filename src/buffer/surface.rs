//! Surface: A cell grid that implements the drawing and viewport capabilities.
//!
//! Draw calls are queued together with the clip that was active when they
//! were issued, then written into the grid on flush. Cells are stored in
//! row-major order: `index = y * width + x`.

use super::cell::{Cell, Rgb};
use crate::backend::{DrawTarget, ViewportState};
use crate::layout::{Point, Rect};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A queued background fill.
#[derive(Debug, Clone)]
struct QueuedFill {
    rect: Rect,
    color: Rgb,
    clip: Option<Rect>,
}

/// A queued text run.
#[derive(Debug, Clone)]
struct QueuedText {
    pos: Point,
    text: String,
    fg: Rgb,
    clip: Option<Rect>,
}

/// Flush counters, useful for profiling multi-pass draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushStats {
    /// Calls to `flush_sprites`.
    pub sprite_flushes: u64,
    /// Calls to `flush_text`.
    pub text_flushes: u64,
    /// Background fills written into the grid.
    pub fills_applied: u64,
    /// Text runs written into the grid.
    pub runs_applied: u64,
}

/// A grid of cells plus the active viewport.
#[derive(Clone)]
pub struct Surface {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Grid width in columns.
    width: u16,
    /// Grid height in rows.
    height: u16,
    /// Active viewport; draws are clipped to it.
    viewport: Rect,
    pending_fills: Vec<QueuedFill>,
    pending_text: Vec<QueuedText>,
    stats: FlushStats,
}

impl Surface {
    /// Create a new surface with the given dimensions.
    ///
    /// The viewport starts out covering the whole grid.
    ///
    /// # Panics
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "Surface dimensions must be non-zero");
        let size = (width as usize) * (height as usize);
        Self {
            cells: vec![Cell::EMPTY; size],
            width,
            height,
            viewport: Rect::from_size(i32::from(width), i32::from(height)),
            pending_fills: Vec::new(),
            pending_text: Vec::new(),
            stats: FlushStats::default(),
        }
    }

    /// Get the surface width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the surface height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The whole grid as a rectangle.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(i32::from(self.width), i32::from(self.height))
    }

    /// Flush counters since creation.
    #[inline]
    pub const fn stats(&self) -> FlushStats {
        self.stats
    }

    /// Number of draw calls waiting for a flush.
    pub fn pending(&self) -> usize {
        self.pending_fills.len() + self.pending_text.len()
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        let x = u16::try_from(x).ok()?;
        let y = u16::try_from(y).ok()?;
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Get a reference to a cell at (x, y).
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    #[inline]
    fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        self.index_of(x, y).map(|i| &mut self.cells[i])
    }

    /// Get an iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    /// The symbols of one row, wide continuations skipped.
    pub fn row_text(&self, y: u16) -> String {
        self.rows()
            .nth(y as usize)
            .map(|row| {
                row.iter()
                    .filter(|c| !c.is_wide_continuation())
                    .map(Cell::symbol)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Reset every cell and drop queued draws. The viewport is kept.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
        self.pending_fills.clear();
        self.pending_text.clear();
    }

    /// Resize the grid, preserving content where possible.
    ///
    /// The viewport is reset to the new bounds.
    pub fn resize(&mut self, new_width: u16, new_height: u16) {
        if new_width == self.width && new_height == self.height {
            return;
        }

        let mut new_cells = vec![Cell::EMPTY; (new_width as usize) * (new_height as usize)];
        let copy_width = self.width.min(new_width) as usize;
        let copy_height = self.height.min(new_height) as usize;

        for y in 0..copy_height {
            let old_start = y * (self.width as usize);
            let new_start = y * (new_width as usize);
            new_cells[new_start..new_start + copy_width]
                .copy_from_slice(&self.cells[old_start..old_start + copy_width]);
        }

        self.cells = new_cells;
        self.width = new_width;
        self.height = new_height;
        self.viewport = self.bounds();
    }

    /// The region draws are currently allowed to touch.
    fn active_clip(&self) -> Option<Rect> {
        self.viewport.intersection(&self.bounds())
    }

    fn apply_fill(&mut self, fill: &QueuedFill) {
        let Some(area) = fill.clip.and_then(|clip| clip.intersection(&fill.rect)) else {
            return;
        };
        for y in area.pos.y..area.bottom() {
            for x in area.pos.x..area.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.paint_bg(fill.color);
                }
            }
        }
        self.stats.fills_applied += 1;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn apply_text(&mut self, run: &QueuedText) {
        let Some(clip) = run.clip else {
            return;
        };
        let y = run.pos.y;
        if y < clip.pos.y || y >= clip.bottom() {
            return;
        }

        let mut x = run.pos.x;
        for grapheme in run.text.graphemes(true) {
            let width = UnicodeWidthStr::width(grapheme) as i32;
            if width == 0 {
                continue;
            }
            if x >= clip.right() {
                break;
            }
            // Partially clipped wide symbols are dropped entirely
            if x >= clip.pos.x && x + width <= clip.right() {
                if let Some(symbol) = grapheme.chars().next() {
                    if let Some(cell) = self.get_mut(x, y) {
                        cell.put_symbol(symbol, run.fg);
                    }
                    if width == 2 {
                        if let Some(cell) = self.get_mut(x + 1, y) {
                            cell.mark_continuation();
                        }
                    }
                }
            }
            x += width;
        }
        self.stats.runs_applied += 1;
    }
}

impl DrawTarget for Surface {
    fn draw_background(&mut self, rect: Rect, color: Rgb) {
        let clip = self.active_clip();
        self.pending_fills.push(QueuedFill { rect, color, clip });
    }

    fn draw_text(&mut self, pos: Point, text: &str, fg: Rgb) {
        let clip = self.active_clip();
        self.pending_text.push(QueuedText {
            pos,
            text: text.to_string(),
            fg,
            clip,
        });
    }

    fn flush_sprites(&mut self) {
        self.stats.sprite_flushes += 1;
        let fills = std::mem::take(&mut self.pending_fills);
        for fill in &fills {
            self.apply_fill(fill);
        }
    }

    fn flush_text(&mut self) {
        self.stats.text_flushes += 1;
        let runs = std::mem::take(&mut self.pending_text);
        for run in &runs {
            self.apply_text(run);
        }
    }
}

impl ViewportState for Surface {
    fn viewport(&self) -> Rect {
        self.viewport
    }

    fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("viewport", &self.viewport)
            .field("pending", &self.pending())
            .finish_non_exhaustive()
    }
}
