//! Cell: The atomic unit of terminal display.

use bitflags::bitflags;

/// True-color RGB representation.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

bitflags! {
    /// Cell-level flags for special states.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellFlags: u8 {
        /// This cell is the right half of a wide character
        const WIDE_CONTINUATION = 0b0000_0001;
        /// Written since the surface was last cleared
        const TOUCHED = 0b0000_0010;
    }
}

impl std::fmt::Debug for CellFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// A single terminal cell: one symbol plus its colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    symbol: char,
    fg: Rgb,
    bg: Rgb,
    flags: CellFlags,
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// A blank cell with default colors.
    pub const EMPTY: Self = Self {
        symbol: ' ',
        fg: Rgb::WHITE,
        bg: Rgb::BLACK,
        flags: CellFlags::empty(),
    };

    /// Create a cell holding `symbol` with default colors.
    #[inline]
    pub const fn new(symbol: char) -> Self {
        Self {
            symbol,
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
            flags: CellFlags::empty(),
        }
    }

    /// Builder: set the foreground color.
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Builder: set the background color.
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// The displayed symbol.
    #[inline]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// Foreground color.
    #[inline]
    pub const fn fg(&self) -> Rgb {
        self.fg
    }

    /// Background color.
    #[inline]
    pub const fn bg(&self) -> Rgb {
        self.bg
    }

    /// Cell flags.
    #[inline]
    pub const fn flags(&self) -> CellFlags {
        self.flags
    }

    /// Paint the background, keeping the symbol.
    #[inline]
    pub fn paint_bg(&mut self, bg: Rgb) {
        self.bg = bg;
        self.flags.insert(CellFlags::TOUCHED);
    }

    /// Write a symbol in `fg`, keeping the background.
    #[inline]
    pub fn put_symbol(&mut self, symbol: char, fg: Rgb) {
        self.symbol = symbol;
        self.fg = fg;
        self.flags.remove(CellFlags::WIDE_CONTINUATION);
        self.flags.insert(CellFlags::TOUCHED);
    }

    /// Turn this cell into the trailing half of a wide symbol.
    #[inline]
    pub fn mark_continuation(&mut self) {
        self.symbol = ' ';
        self.flags
            .insert(CellFlags::WIDE_CONTINUATION | CellFlags::TOUCHED);
    }

    /// Check if this is the trailing half of a wide symbol.
    #[inline]
    pub const fn is_wide_continuation(&self) -> bool {
        self.flags.contains(CellFlags::WIDE_CONTINUATION)
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("symbol", &self.symbol)
            .field("fg", &self.fg)
            .field("bg", &self.bg)
            .field("flags", &self.flags)
            .finish()
    }
}
