//! Engine: Main coordinator that drives a layout tree on a real terminal.
//!
//! The Engine owns the terminal: it enters raw mode, spawns the input
//! actor, and restores everything on drop. Each call to [`Engine::frame`]
//! runs one full cycle over the tree:
//!
//! ```text
//! drain input ─▶ update ─▶ calculate_dimensions ─▶ draw levels ─▶ write
//! ```

use super::messages::InputEvent;
use super::pointer::PointerState;
use super::InputActor;
use crate::buffer::Surface;
use crate::layout::{Point, Size};
use crate::node::{draw_levels, UiNode};
use crate::terminal::OutputBuffer;
use crossbeam_channel::{bounded, Receiver, TryRecvError};
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Configuration for the Engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Target frames per second.
    pub target_fps: u32,
    /// Input poll timeout.
    pub input_poll_timeout: Duration,
    /// Whether to enable mouse capture.
    pub enable_mouse: bool,
    /// Whether to use alternate screen buffer.
    pub alternate_screen: bool,
    /// Upper bound on draw levels per frame.
    pub max_draw_levels: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            input_poll_timeout: Duration::from_millis(10),
            enable_mouse: true,
            alternate_screen: true,
            max_draw_levels: 64,
        }
    }
}

/// Per-frame state that does not touch the terminal.
struct FrameState {
    pointer: PointerState,
    surface: Surface,
    output: OutputBuffer,
    /// Events drained during the current frame.
    events: Vec<InputEvent>,
    running: bool,
}

impl FrameState {
    fn new(width: u16, height: u16) -> Self {
        Self {
            pointer: PointerState::new(),
            surface: Surface::new(width.max(1), height.max(1)),
            output: OutputBuffer::with_capacity(usize::from(width) * usize::from(height) * 4),
            events: Vec::new(),
            running: true,
        }
    }

    fn begin(&mut self) {
        self.pointer.begin_frame();
        self.events.clear();
    }

    fn absorb(&mut self, event: InputEvent, root: &mut dyn UiNode) {
        self.pointer.apply(&event);
        match &event {
            InputEvent::Resize { width, height } => {
                self.surface.resize((*width).max(1), (*height).max(1));
                root.set_size(Size::new(i32::from(*width), i32::from(*height)));
                tracing::debug!(width, height, "terminal resized");
            }
            InputEvent::Shutdown => self.running = false,
            InputEvent::Error(message) => tracing::warn!(%message, "input error"),
            _ => {}
        }
        self.events.push(event);
    }

    /// Update, lay out and draw `root`, then serialize the surface.
    fn compose(&mut self, root: &mut dyn UiNode, max_levels: u16) -> u16 {
        root.update(&self.pointer);
        root.calculate_dimensions(Point::ZERO);

        self.surface.clear();
        let levels = draw_levels(root, &mut self.surface, max_levels);

        self.output.clear();
        self.output.render_surface(&self.surface);
        levels
    }
}

/// The main engine.
///
/// Owns the terminal for its lifetime; dropping it restores the terminal.
pub struct Engine {
    /// Configuration.
    config: EngineConfig,
    /// Input event receiver.
    input_rx: Receiver<InputEvent>,
    /// Input actor handle.
    input_actor: Option<InputActor>,
    state: FrameState,
    /// Frame timing.
    frame_duration: Duration,
    frame_count: u64,
}

impl Engine {
    /// Create a new engine with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails (raw mode, alternate screen, etc.).
    pub fn new() -> io::Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Create a new engine with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    pub fn with_config(config: EngineConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        if config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        if config.enable_mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        execute!(stdout, cursor::Hide)?;

        let (input_tx, input_rx) = bounded::<InputEvent>(64);
        let input_actor = InputActor::spawn(input_tx, config.input_poll_timeout)?;

        let frame_duration = Duration::from_secs(1) / config.target_fps.max(1);
        tracing::debug!(width, height, fps = config.target_fps, "engine started");

        Ok(Self {
            config,
            input_rx,
            input_actor: Some(input_actor),
            state: FrameState::new(width, height),
            frame_duration,
            frame_count: 0,
        })
    }

    /// Get the terminal size as a layout size.
    pub fn size(&self) -> Size {
        Size::new(
            i32::from(self.state.surface.width()),
            i32::from(self.state.surface.height()),
        )
    }

    /// The composed surface from the last frame.
    pub const fn surface(&self) -> &Surface {
        &self.state.surface
    }

    /// Events drained during the last frame, for key handling.
    pub fn events(&self) -> &[InputEvent] {
        &self.state.events
    }

    /// Check if the engine is still running.
    pub const fn is_running(&self) -> bool {
        self.state.running
    }

    /// Stop the engine.
    pub fn stop(&mut self) {
        self.state.running = false;
    }

    /// Get the current frame count.
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Run one frame over `root` and write it to the terminal.
    ///
    /// Sleeps if necessary to hold the target FPS.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn frame(&mut self, root: &mut dyn UiNode) -> io::Result<()> {
        let frame_start = Instant::now();
        self.state.begin();

        loop {
            match self.input_rx.try_recv() {
                Ok(event) => self.state.absorb(event, root),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.state.absorb(
                        InputEvent::Error("input channel disconnected".to_string()),
                        root,
                    );
                    self.state.running = false;
                    break;
                }
            }
        }

        let levels = self.state.compose(root, self.config.max_draw_levels);
        tracing::trace!(frame = self.frame_count, levels, "frame composed");

        let mut stdout = io::stdout().lock();
        self.state.output.flush_to(&mut stdout)?;
        stdout.flush()?;
        self.frame_count += 1;

        let elapsed = frame_start.elapsed();
        if elapsed < self.frame_duration {
            std::thread::sleep(self.frame_duration - elapsed);
        }
        Ok(())
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        if let Some(actor) = self.input_actor.take() {
            actor.stop(&self.input_rx);
        }

        // Restore terminal state
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show);
        if self.config.enable_mouse {
            let _ = execute!(stdout, DisableMouseCapture);
        }
        if self.config.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
        tracing::debug!(frames = self.frame_count, "engine stopped");
    }
}
