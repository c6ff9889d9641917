//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences.

use crate::buffer::{Rgb, Surface};
use std::io::Write;

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// A whole frame is accumulated here, then flushed in a single `write()`
/// so the terminal never shows a half-drawn surface.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical terminal (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Move cursor to (x, y) position (1-indexed for ANSI).
    #[inline]
    pub fn cursor_move(&mut self, x: u16, y: u16) {
        // CSI row ; col H. Writes into a Vec are infallible.
        let _ = write!(
            self.data,
            "\x1b[{};{}H",
            u32::from(y) + 1,
            u32::from(x) + 1
        );
    }

    /// Hide cursor.
    #[inline]
    pub fn cursor_hide(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25l");
    }

    /// Show cursor.
    #[inline]
    pub fn cursor_show(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25h");
    }

    /// Set foreground color (true color).
    #[inline]
    pub fn set_fg(&mut self, color: Rgb) {
        let _ = write!(self.data, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b);
    }

    /// Set background color (true color).
    #[inline]
    pub fn set_bg(&mut self, color: Rgb) {
        let _ = write!(self.data, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b);
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Clear the entire screen.
    #[inline]
    pub fn clear_screen(&mut self) {
        self.data.extend_from_slice(b"\x1b[2J");
    }

    /// Serialize every row of `surface`.
    ///
    /// Color escapes are only emitted when the color changes between cells.
    /// Wide-character continuation cells are skipped since the terminal
    /// advances past them on its own.
    pub fn render_surface(&mut self, surface: &Surface) {
        let mut fg: Option<Rgb> = None;
        let mut bg: Option<Rgb> = None;
        let mut utf8 = [0u8; 4];

        for (y, row) in surface.rows().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            self.cursor_move(0, y as u16);
            for cell in row {
                if cell.is_wide_continuation() {
                    continue;
                }
                if fg != Some(cell.fg()) {
                    self.set_fg(cell.fg());
                    fg = Some(cell.fg());
                }
                if bg != Some(cell.bg()) {
                    self.set_bg(cell.bg());
                    bg = Some(cell.bg());
                }
                let encoded = cell.symbol().encode_utf8(&mut utf8);
                self.data.extend_from_slice(encoded.as_bytes());
            }
        }
        self.reset_attrs();
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}
