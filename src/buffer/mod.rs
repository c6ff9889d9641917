//! Buffer module: The cell grid that nodes draw into.
//!
//! This module contains:
//! - [`Cell`]: One symbol with foreground and background colors
//! - [`Surface`]: A grid of cells implementing the draw and viewport capabilities
//! - [`Rgb`]: True-color representation

mod cell;
mod surface;

pub use cell::{Cell, CellFlags, Rgb};
pub use surface::{FlushStats, Surface};
