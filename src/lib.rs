//! # Panecraft
//!
//! A terminal layout and composition core.
//!
//! A UI is a tree of [`UiNode`]s. Every frame the tree is updated with the
//! frame's input, laid out from the root, and drawn level by level so that
//! containers paint before their children.
//!
//! ## Core Concepts
//!
//! - **Nodes**: [`FixedContainer`], [`DynamicBox`], [`Splitter`] and [`Portal`]
//! - **Capabilities**: nodes draw through [`Graphics`] and read [`InputQuery`]
//! - **Clipping**: a portal narrows the viewport with a [`ViewportGuard`]
//!   that restores it on every exit path
//! - **Terminal**: [`Surface`] and [`Engine`] put a tree on a real terminal
//!
//! ## Example
//!
//! ```rust
//! use panecraft::{Axis, DynamicBox, FixedContainer, Point, Positioning, Rect, UiNode};
//!
//! let mut row = DynamicBox::new(Axis::Horizontal)
//!     .with_child(Box::new(FixedContainer::new(Rect::new(0, 0, 10, 20))), Positioning::Dynamic)
//!     .with_child(Box::new(FixedContainer::new(Rect::new(0, 0, 30, 5))), Positioning::Dynamic);
//!
//! assert_eq!(row.calculate_dimensions(Point::ZERO), Rect::new(0, 0, 40, 20));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod backend;
pub mod buffer;
pub mod error;
pub mod layout;
pub mod node;
pub mod terminal;

// Re-exports for convenience
pub use actor::{Engine, EngineConfig, InputEvent, KeyCode, KeyModifiers, PointerState};
pub use backend::{DrawTarget, Graphics, InputQuery, ViewportGuard, ViewportState};
pub use buffer::{Cell, Rgb, Surface};
pub use error::LayoutError;
pub use layout::{Axis, Point, Rect, Size};
pub use node::{
    Blueprint, DynamicBox, FixedContainer, Portal, PortalConfig, Positioning, Splitter,
    SplitterConfig, UiNode,
};
