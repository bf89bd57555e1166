//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) and pixels (presentation) with the
// frame-stepped game.
//
// Architecture:
// ```text
//  Main Thread:
//  ┌────────────────────────────────────────────┐
//  │  Winit Event Loop                          │
//  │   ↓                                        │
//  │  InputProcessor  (Winit → InputEvent)      │
//  │   ↓                                        │
//  │  InputBuffer                               │
//  │   ├─ discrete: Vec<>                       │
//  │   └─ continuous: HashSet<>                 │
//  │   ↓                                        │
//  │  RedrawRequested                           │
//  │   ├─ FrameClock::tick(max_fps)             │
//  │   ├─ Game::step(dt, inputs, canvas)        │
//  │   ├─ apply DisplayRequests                 │
//  │   └─ canvas → pixels frame → render        │
//  └────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: all input gathered since the
//   previous redraw is handed to the game as one batch
// - **Fixed canvas size**: the game draws at the configured resolution;
//   pixels scales it to the window and maps cursor positions back
// - **Fatal errors are stored**: the first error stops the event loop and
//   is returned from `run()`
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Game::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use std::sync::Arc;

use log::*;
use pixels::{Pixels, SurfaceTexture};
use thiserror::Error;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalPosition},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Fullscreen, Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::events::TickControl;
use crate::core::render::Canvas;
use crate::core::timing::FrameClock;
use crate::game::{DisplayRequest, Game, GameError};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== PlatformError =======================================================

/// Window, event loop and presentation failures.
///
/// These are fatal: the game cannot continue without a window to draw to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// Failed to create the event loop (OS-level issue).
    #[error("Event loop creation failed: {0}")]
    EventLoopCreation(String),

    /// The event loop stopped with an error.
    #[error("Event loop error: {0}")]
    EventLoopExecution(String),

    /// The window could not be created.
    #[error("Window creation failed: {0}")]
    WindowCreation(String),

    /// The pixel buffer could not be created, resized or presented.
    #[error("Render error: {0}")]
    Render(String),
}

//=== Platform ============================================================

/// Window owner and frame driver.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(game)`
/// 2. **Execution**: `platform.run()` starts the event loop and blocks
/// 3. **Frames**: every `RedrawRequested` steps the game once
/// 4. **Shutdown**: window close, a `Quit` event, or a fatal error
pub(crate) struct Platform {
    game: Game,

    /// OS window (None until `resumed()` is called).
    window: Option<Arc<Window>>,

    /// Presentation target bound to `window`.
    pixels: Option<Pixels<'static>>,

    /// Software canvas the game draws into.
    canvas: Canvas,

    clock: FrameClock,
    buffer: InputBuffer,
    input_processor: InputProcessor,
    frame_count: u64,

    /// First fatal error, returned from `run()`.
    fatal: Option<GameError>,
}

impl Platform {
    /// Frames between window title FPS refreshes.
    const TITLE_REFRESH_FRAMES: u64 = 30;

    //--- Construction -----------------------------------------------------

    /// Wraps `game`. The window is created lazily in `resumed()`.
    pub(crate) fn new(game: Game) -> Self {
        let (width, height) = game.config().window_size;
        info!(target: "platform", "Platform subsystem initialized ({}x{} canvas)", width, height);

        Self {
            game,
            window: None,
            pixels: None,
            canvas: Canvas::new(width, height),
            clock: FrameClock::new(),
            buffer: InputBuffer::new(),
            input_processor: InputProcessor::new(),
            frame_count: 0,
            fatal: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the game exits.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails, or the first fatal error raised while running.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit requirement).
    pub(crate) fn run(mut self) -> Result<(), GameError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop =
            EventLoop::new().map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))?;

        match self.fatal.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Records a fatal error and stops the event loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: GameError) {
        error!(target: "platform", "Fatal error: {}", error);
        if self.fatal.is_none() {
            self.fatal = Some(error);
        }
        event_loop.exit();
    }

    /// Creates the window and its pixel buffer.
    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PlatformError> {
        let config = self.game.config();
        let (width, height) = config.window_size;

        let attrs = WindowAttributes::default()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(width, height))
            .with_min_inner_size(LogicalSize::new(width / 2, height / 2));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| PlatformError::WindowCreation(e.to_string()))?;

        let size = window.inner_size();
        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            size.width,
            size.height,
            window.scale_factor()
        );

        let texture = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels = Pixels::new(width, height, texture)
            .map_err(|e| PlatformError::Render(e.to_string()))?;

        window.request_redraw();
        self.window = Some(window);
        self.pixels = Some(pixels);
        Ok(())
    }

    /// Maps a window position to canvas pixels, clamping outside points.
    fn cursor_to_canvas(&self, position: PhysicalPosition<f64>) -> (f32, f32) {
        let raw = (position.x as f32, position.y as f32);
        match &self.pixels {
            Some(pixels) => {
                let (x, y) = pixels
                    .window_pos_to_pixel(raw)
                    .unwrap_or_else(|outside| pixels.clamp_pixel_pos(outside));
                (x as f32, y as f32)
            }
            None => raw,
        }
    }

    /// Runs one game frame and presents it.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.clock.tick(self.game.max_fps());

        if !self.buffer.is_empty() {
            trace!(target: "platform::input", "Flushing {} input events", self.buffer.len());
        }
        let inputs = self.buffer.drain();

        match self.game.step(dt, &inputs, &mut self.canvas) {
            Ok(TickControl::Continue) => {}
            Ok(TickControl::Exit) => {
                info!(target: "platform", "Game requested exit");
                event_loop.exit();
                return;
            }
            Err(error) => {
                self.fail(event_loop, error);
                return;
            }
        }

        self.apply_display_requests();

        if let Err(error) = self.present() {
            self.fail(event_loop, error.into());
            return;
        }

        self.frame_count += 1;
        if let Some(window) = &self.window {
            if self.frame_count % Self::TITLE_REFRESH_FRAMES == 0 {
                window.set_title(&format!("{} - {:.0} FPS", self.game.config().title, self.clock.fps()));
            }
            window.request_redraw();
        }
    }

    /// Copies the canvas into the pixel buffer and renders it.
    fn present(&mut self) -> Result<(), PlatformError> {
        let Some(pixels) = &mut self.pixels else {
            return Ok(());
        };

        pixels.frame_mut().copy_from_slice(self.canvas.pixels());
        pixels.render().map_err(|e| PlatformError::Render(e.to_string()))
    }

    /// Applies window changes the game asked for this frame.
    fn apply_display_requests(&mut self) {
        let requests = self.game.take_display_requests();
        let Some(window) = &self.window else {
            return;
        };

        for request in requests {
            match request {
                DisplayRequest::ToggleFullscreen => {
                    let fullscreen = match window.fullscreen() {
                        Some(_) => None,
                        None => Some(Fullscreen::Borderless(None)),
                    };
                    info!(target: "platform", "Fullscreen: {}", fullscreen.is_some());
                    window.set_fullscreen(fullscreen);
                }
            }
        }
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        if let Err(error) = self.create_window(event_loop) {
            self.fail(event_loop, error.into());
        }
    }

    /// Handles per-window events.
    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                debug!(target: "platform", "Window resized to {}x{}", size.width, size.height);
                let Some(pixels) = &mut self.pixels else {
                    return;
                };
                if let Err(e) = pixels.resize_surface(size.width.max(1), size.height.max(1)) {
                    self.fail(event_loop, PlatformError::Render(e.to_string()).into());
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = self.cursor_to_canvas(position);
                let event = self.input_processor.process_mouse_move(x, y);
                self.buffer.push_continuous(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(&key_event) {
                    self.buffer.push_discrete(event);
                } else {
                    trace!(target: "platform::input", "Unmapped key ignored");
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(event) = self.input_processor.process_mouse_button(button, state) {
                    self.buffer.push_discrete(event);
                } else {
                    trace!(target: "platform::input", "Unbound mouse button ignored");
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameBuilder;

    //=====================================================================
    // PlatformError Tests
    //=====================================================================

    #[test]
    fn platform_error_display_format() {
        let error = PlatformError::WindowCreation("no display".into());
        assert_eq!(error.to_string(), "Window creation failed: no display");
    }

    #[test]
    fn platform_error_converts_into_game_error() {
        let error: GameError = PlatformError::Render("lost surface".into()).into();
        assert!(matches!(error, GameError::Platform(PlatformError::Render(_))));
        assert_eq!(error.to_string(), "Render error: lost surface");
    }

    //=====================================================================
    // Platform Tests
    //=====================================================================

    #[test]
    fn platform_creation_is_lazy() {
        let game = GameBuilder::new().with_window_size(320, 240).build().unwrap();
        let platform = Platform::new(game);

        assert!(platform.window.is_none(), "Window should be created lazily");
        assert!(platform.pixels.is_none());
        assert_eq!(platform.canvas.pixels().len(), 320 * 240 * 4);
        assert!(platform.buffer.is_empty());
    }

    #[test]
    fn cursor_passes_through_without_pixels() {
        let game = GameBuilder::new().build().unwrap();
        let platform = Platform::new(game);

        assert_eq!(platform.cursor_to_canvas(PhysicalPosition::new(12.0, 34.0)), (12.0, 34.0));
    }

    #[test]
    fn present_without_window_is_noop() {
        let game = GameBuilder::new().build().unwrap();
        let mut platform = Platform::new(game);

        assert_eq!(platform.present(), Ok(()));
    }
}
