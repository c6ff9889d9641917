//! Layout nodes.
//!
//! Every node implements [`UiNode`]. The tree is made of four kinds:
//!
//! - [`FixedContainer`]: an authored rectangle, usually a leaf;
//! - [`DynamicBox`]: stacks children along an axis and sizes itself to them;
//! - [`Splitter`]: divides its area between two children with a draggable bar;
//! - [`Portal`]: clips its child to its own rectangle and scrolls it.
//!
//! Trees can be assembled by hand or from a [`Blueprint`], which validates
//! the structure first.

mod blueprint;
mod dynamic_box;
mod fixed;
mod frame;
mod portal;
mod splitter;
mod traits;

pub use blueprint::Blueprint;
pub use dynamic_box::{DynamicBox, Positioning};
pub use fixed::FixedContainer;
pub use frame::draw_levels;
pub use portal::{Portal, PortalConfig};
pub use splitter::{Splitter, SplitterConfig};
pub use traits::UiNode;
