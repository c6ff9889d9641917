//! Actors: the input thread and the frame loop that drives the layout tree.
//!
//! Terminal input is polled on its own thread and sent over a crossbeam
//! channel. The main thread drains it once per frame, so the layout tree is
//! only ever touched from one thread.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     InputEvent      ┌──────────────┐
//! │ Input Thread │ ─────────────────▶  │    Engine    │
//! └──────────────┘                     │  (main loop) │
//!                                      └──────┬───────┘
//!                                             │ PointerState
//!                                             ▼
//!                                      ┌──────────────┐
//!                                      │  UiNode tree │
//!                                      └──────────────┘
//! ```

mod engine;
mod input;
mod messages;
mod pointer;

pub use engine::{Engine, EngineConfig};
pub use input::InputActor;
pub use messages::{InputEvent, KeyCode, KeyModifiers, MouseButton, MouseEvent};
pub use pointer::{Buttons, PointerState};
