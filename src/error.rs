//! Layout construction errors.

use thiserror::Error;

/// A layout tree that cannot be built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A splitter was described with too few or too many children.
    #[error("splitter needs exactly two children, got {0}")]
    SplitterArity(usize),

    /// Split percentage is NaN or infinite.
    #[error("invalid split percentage: {0}")]
    InvalidSplitPercentage(f32),

    /// Hit band is negative, NaN or infinite.
    #[error("invalid split region: {0}")]
    InvalidSplitRegion(f32),

    /// A rectangle with a negative dimension.
    #[error("negative size {width}x{height}")]
    NegativeSize {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },

    /// A portal configured with `max_passes == 0`.
    #[error("portal must allow at least one draw pass")]
    NoDrawPasses,
}
