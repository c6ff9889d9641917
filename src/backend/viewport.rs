//! Scoped viewport narrowing.

use super::traits::Graphics;
use crate::layout::Rect;
use std::ops::{Deref, DerefMut};

/// Narrows the viewport for as long as it lives.
///
/// The previous viewport is put back on drop, which also runs while a panic
/// unwinds through a child draw. Draw calls go through the guard via `Deref`.
pub struct ViewportGuard<'a> {
    gfx: &'a mut dyn Graphics,
    saved: Rect,
}

impl<'a> ViewportGuard<'a> {
    /// Save the current viewport and switch to `viewport`.
    pub fn narrow(gfx: &'a mut dyn Graphics, viewport: Rect) -> Self {
        let saved = gfx.viewport();
        gfx.set_viewport(viewport);
        Self { gfx, saved }
    }

    /// The viewport that will be restored.
    pub const fn saved(&self) -> Rect {
        self.saved
    }
}

impl<'a> Deref for ViewportGuard<'a> {
    type Target = dyn Graphics + 'a;

    fn deref(&self) -> &Self::Target {
        self.gfx
    }
}

impl<'a> DerefMut for ViewportGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.gfx
    }
}

impl Drop for ViewportGuard<'_> {
    fn drop(&mut self) {
        self.gfx.set_viewport(self.saved);
    }
}
