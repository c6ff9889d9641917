//! Backend capabilities: the seam between the layout tree and its host.
//!
//! - [`DrawTarget`]: background fills, text runs and their flushes
//! - [`ViewportState`]: the single active clip region
//! - [`InputQuery`]: per-frame pointer state
//! - [`ViewportGuard`]: scoped viewport narrowing with guaranteed restore

mod traits;
mod viewport;

pub use traits::{DrawTarget, Graphics, InputQuery, ViewportState};
pub use viewport::ViewportGuard;
