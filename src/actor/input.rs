//! Input Actor: Dedicated thread for polling terminal events.
//!
//! crossterm's `poll`/`read` block, so they live on their own thread and
//! forward converted events over a bounded channel. The frame loop drains the
//! channel once per frame.

use super::messages::{InputEvent, KeyCode, KeyModifiers, MouseButton, MouseEvent};
use crate::layout::Point;
use crossbeam_channel::{Receiver, Sender};
use crossterm::event::{self, Event, KeyEventKind, MouseEventKind};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Input actor that polls terminal events.
pub struct InputActor {
    handle: Option<JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input thread.
    ///
    /// `poll_timeout` bounds how long the thread waits for an event before it
    /// checks the shutdown flag again.
    pub fn spawn(sender: Sender<InputEvent>, poll_timeout: Duration) -> io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&shutdown);

        let handle = thread::Builder::new()
            .name("panecraft-input".to_string())
            .spawn(move || Self::run_loop(&sender, &flag, poll_timeout))?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Signal shutdown and wait for the thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Signal shutdown and wait for the thread, draining `receiver` so a
    /// full channel cannot leave the thread blocked in `send`.
    ///
    /// `receiver` must be the other end of the channel given to [`spawn`](Self::spawn).
    pub fn stop(mut self, receiver: &Receiver<InputEvent>) {
        self.shutdown();
        // Ends once the thread exits and drops its sender
        let drained = receiver.iter().count();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        tracing::debug!(drained, "input actor stopped");
    }

    fn run_loop(sender: &Sender<InputEvent>, shutdown: &AtomicBool, poll_timeout: Duration) {
        while !shutdown.load(Ordering::Relaxed) {
            let next = match event::poll(poll_timeout) {
                Ok(true) => event::read().map(Self::convert_event),
                Ok(false) => continue,
                Err(e) => Err(e),
            };

            let message = match next {
                Ok(Some(event)) => event,
                Ok(None) => continue,
                Err(e) => {
                    tracing::debug!("terminal event error: {e}");
                    InputEvent::Error(e.to_string())
                }
            };

            if sender.send(message).is_err() {
                // Frame loop is gone
                return;
            }
        }
        let _ = sender.send(InputEvent::Shutdown);
    }

    /// Convert a crossterm event, dropping the ones the frame loop ignores.
    fn convert_event(event: Event) -> Option<InputEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(InputEvent::Key {
                code: Self::convert_key_code(key.code)?,
                modifiers: Self::convert_modifiers(key.modifiers),
            }),
            Event::Mouse(mouse) => Self::convert_mouse_event(mouse),
            Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
            _ => None,
        }
    }

    fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
        Some(match code {
            event::KeyCode::Char(c) => KeyCode::Char(c),
            event::KeyCode::Enter => KeyCode::Enter,
            event::KeyCode::Tab => KeyCode::Tab,
            event::KeyCode::Left => KeyCode::Left,
            event::KeyCode::Right => KeyCode::Right,
            event::KeyCode::Up => KeyCode::Up,
            event::KeyCode::Down => KeyCode::Down,
            event::KeyCode::Esc => KeyCode::Esc,
            _ => return None,
        })
    }

    fn convert_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
        KeyModifiers {
            shift: mods.contains(event::KeyModifiers::SHIFT),
            control: mods.contains(event::KeyModifiers::CONTROL),
            alt: mods.contains(event::KeyModifiers::ALT),
        }
    }

    fn convert_mouse_event(mouse: event::MouseEvent) -> Option<InputEvent> {
        let position = Point::new(i32::from(mouse.column), i32::from(mouse.row));
        let with_button = |button: event::MouseButton| MouseEvent {
            position,
            button: Some(Self::convert_mouse_button(button)),
        };

        Some(match mouse.kind {
            MouseEventKind::Down(button) => InputEvent::MouseDown(with_button(button)),
            MouseEventKind::Up(button) => InputEvent::MouseUp(with_button(button)),
            MouseEventKind::Drag(button) => InputEvent::MouseMove(with_button(button)),
            MouseEventKind::Moved => InputEvent::MouseMove(MouseEvent {
                position,
                button: None,
            }),
            MouseEventKind::ScrollUp => InputEvent::MouseScroll { position, delta: 1 },
            MouseEventKind::ScrollDown => InputEvent::MouseScroll { position, delta: -1 },
            _ => return None,
        })
    }

    const fn convert_mouse_button(button: event::MouseButton) -> MouseButton {
        match button {
            event::MouseButton::Left => MouseButton::Left,
            event::MouseButton::Right => MouseButton::Right,
            event::MouseButton::Middle => MouseButton::Middle,
        }
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
