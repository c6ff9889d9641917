//! Pointer state: per-frame button edges built from input events.
//!
//! The frame loop calls [`PointerState::begin_frame`], feeds every event it
//! drained from the input channel through [`PointerState::apply`], and then
//! hands the state to the layout tree as an [`InputQuery`].

use super::messages::{InputEvent, MouseButton};
use crate::backend::InputQuery;
use crate::layout::Point;
use bitflags::bitflags;

bitflags! {
    /// A set of mouse buttons.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
    pub struct Buttons: u8 {
        /// Left button
        const PRIMARY = 0b0000_0001;
        /// Right button
        const SECONDARY = 0b0000_0010;
        /// Middle button
        const MIDDLE = 0b0000_0100;
    }
}

impl From<MouseButton> for Buttons {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::PRIMARY,
            MouseButton::Right => Self::SECONDARY,
            MouseButton::Middle => Self::MIDDLE,
        }
    }
}

/// Pointer position and button edges for one frame.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    position: Point,
    held: Buttons,
    just_pressed: Buttons,
    just_released: Buttons,
    scroll: i32,
}

impl PointerState {
    /// Pointer at the origin, nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget last frame's edges and wheel movement.
    ///
    /// Held buttons and the pointer position carry over.
    pub fn begin_frame(&mut self) {
        self.just_pressed = Buttons::empty();
        self.just_released = Buttons::empty();
        self.scroll = 0;
    }

    /// Fold one input event into the state. Non-pointer events are ignored.
    pub fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::MouseDown(mouse) => {
                self.position = mouse.position;
                if let Some(button) = mouse.button {
                    let button = Buttons::from(button);
                    self.held.insert(button);
                    self.just_pressed.insert(button);
                }
            }
            InputEvent::MouseUp(mouse) => {
                self.position = mouse.position;
                if let Some(button) = mouse.button {
                    let button = Buttons::from(button);
                    self.held.remove(button);
                    self.just_released.insert(button);
                }
            }
            InputEvent::MouseMove(mouse) => self.position = mouse.position,
            InputEvent::MouseScroll { position, delta } => {
                self.position = *position;
                self.scroll += i32::from(*delta);
            }
            _ => {}
        }
    }

    /// Buttons currently held down.
    pub const fn held(&self) -> Buttons {
        self.held
    }
}

impl InputQuery for PointerState {
    fn pointer_position(&self) -> Point {
        self.position
    }

    fn primary_just_pressed(&self) -> bool {
        self.just_pressed.contains(Buttons::PRIMARY)
    }

    fn primary_just_released(&self) -> bool {
        self.just_released.contains(Buttons::PRIMARY)
    }

    fn scroll_delta(&self) -> i32 {
        self.scroll
    }
}
