//=========================================================================
// Blackjack Game
//
// Main entry point and coordinator for the game.
//
// Architecture:
// ```text
//     GameBuilder  ──build()──>  Game  ──run()──>  Platform (winit)
//         │                       │                   │
//         ├─ with_title()         ├─ StateManager     └─ calls step()
//         ├─ with_window_size()   ├─ EventQueue          on every redraw
//         ├─ with_*_fps()         └─ GlobalContext
//         └─ with_event_capacity()
// ```
//
// Frame (Game::step):
//   inputs → StateTracker → drain AppEvents → dispatch → update → draw
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, warn};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::assets;
use crate::core::assets::AssetError;
use crate::core::events::{AppEvent, EventQueue, EventSender, TickControl};
use crate::core::globals::GlobalContext;
use crate::core::input::InputEvent;
use crate::core::render::{Color, Surface};
use crate::core::state::{StateError, StateManager};
use crate::platform::{Platform, PlatformError};
use crate::states::{GameStates, GameplayState, IntroState};
use crate::ui::menus;

//=== GameError ===========================================================

/// Any failure that stops the game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Platform(#[from] PlatformError),
}

//=== DisplayRequest ======================================================

/// Window changes requested by the game, applied by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayRequest {
    ToggleFullscreen,
}

//=== GameConfig ==========================================================

/// Settings fixed at build time.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub title: String,

    /// Window and canvas size in pixels.
    pub window_size: (u32, u32),

    /// Frame cap while a menu is shown.
    pub menu_fps: u32,

    /// Frame cap during gameplay.
    pub gameplay_fps: u32,

    pub event_capacity: usize,

    /// Color the canvas is cleared to before each draw.
    pub clear_color: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Blackjack".to_owned(),
            window_size: (800, 600),
            menu_fps: 60,
            gameplay_fps: 250,
            event_capacity: 128,
            clear_color: Color::BLACK,
        }
    }
}

//=== GameBuilder =========================================================

/// Builder for configuring and constructing a [`Game`].
///
/// # Default Values
///
/// - **Title**: "Blackjack"
/// - **Window size**: 800×600
/// - **Menu FPS**: 60
/// - **Gameplay FPS**: 250
/// - **Event capacity**: 128 events
/// - **Clear color**: black
///
/// # Examples
///
/// ```no_run
/// use blackjack::GameBuilder;
///
/// GameBuilder::new()
///     .with_window_size(1280, 720)
///     .with_menu_fps(30)
///     .build()?
///     .run()?;
/// # Ok::<(), blackjack::GameError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Sets the window and canvas size.
    ///
    /// Default: 800×600
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "Window size must be positive, got {}x{}",
            width,
            height
        );
        self.config.window_size = (width, height);
        self
    }

    /// Sets the frame cap used while menus are shown.
    ///
    /// Default: 60
    ///
    /// # Panics
    ///
    /// Panics if `fps == 0`.
    pub fn with_menu_fps(mut self, fps: u32) -> Self {
        assert!(fps > 0, "Menu FPS must be positive");
        self.config.menu_fps = fps;
        self
    }

    /// Sets the frame cap used during gameplay.
    ///
    /// Default: 250
    ///
    /// # Panics
    ///
    /// Panics if `fps == 0`.
    pub fn with_gameplay_fps(mut self, fps: u32) -> Self {
        assert!(fps > 0, "Gameplay FPS must be positive");
        self.config.gameplay_fps = fps;
        self
    }

    /// Sets how many application events may be pending at once.
    ///
    /// Events posted while the queue is full are dropped with a warning.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Event capacity must be positive");
        self.config.event_capacity = capacity;
        self
    }

    /// Sets the color the canvas is cleared to every frame.
    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.config.clear_color = color;
        self
    }

    /// Loads assets and registers every game state.
    ///
    /// The intro is registered first and is therefore the initial state.
    pub fn build(self) -> Result<Game, GameError> {
        let config = self.config;
        info!(
            target: "game",
            "Building game ({}x{}, menu {} FPS, gameplay {} FPS, events: {})",
            config.window_size.0,
            config.window_size.1,
            config.menu_fps,
            config.gameplay_fps,
            config.event_capacity
        );

        let assets = assets::load()?;
        let size = config.window_size;

        let mut states = StateManager::new();
        states.add(GameStates::Intro, IntroState::new(&assets, size)?);
        states.add(GameStates::MainMenu, menus::main_menu(size));
        states.add(GameStates::OptionsMenu, menus::options_menu(size));
        states.add(GameStates::Gameplay, GameplayState::new(&assets, size)?);
        states.add(GameStates::PauseMenu, menus::pause_menu(size));

        let events = EventQueue::new(config.event_capacity);
        let context = GlobalContext::new(events.sender(), size);

        Ok(Game {
            max_fps: config.menu_fps,
            config,
            states,
            events,
            context,
            display_requests: Vec::new(),
        })
    }
}

//=== Interrupt ===========================================================

/// Turns Ctrl-C into a regular quit so the loop shuts down cleanly.
fn on_interrupt(sender: &EventSender) {
    info!(target: "game", "User request to shut down received");
    sender.post(AppEvent::Quit);
}

//=== Game ================================================================

/// Frame-stepped game: state manager, event dispatch and input state.
///
/// Create via [`GameBuilder`]. [`Game::run`] opens the window and drives
/// [`Game::step`] once per redraw until the game quits.
pub struct Game {
    config: GameConfig,
    states: StateManager<GameStates>,
    events: EventQueue,
    context: GlobalContext,
    max_fps: u32,
    display_requests: Vec<DisplayRequest>,
}

impl Game {
    //--- Execution --------------------------------------------------------

    /// Opens the window and blocks until the game exits.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error from the platform or from a frame.
    pub fn run(self) -> Result<(), GameError> {
        info!(target: "game", "Starting {}", self.config.title);

        let sender = self.event_sender();
        if let Err(e) = ctrlc::set_handler(move || on_interrupt(&sender)) {
            warn!(target: "game", "Interrupt handler not installed: {}", e);
        }

        Platform::new(self).run()?;
        info!(target: "game", "Shutdown complete");
        Ok(())
    }

    /// Advances the game by one frame and draws it onto `surface`.
    ///
    /// Application events posted during the previous frame are dispatched
    /// before the current state is updated.
    pub fn step(
        &mut self,
        dt: f32,
        inputs: &[InputEvent],
        surface: &mut dyn Surface,
    ) -> Result<TickControl, GameError> {
        self.context.input_state.begin_frame();
        self.context.input_state.process_events(inputs);

        for event in self.events.drain_frame() {
            if self.handle_app_event(event) == TickControl::Exit {
                return Ok(TickControl::Exit);
            }
        }

        self.states.update(&self.context, dt)?;

        surface.fill(self.config.clear_color);
        self.states.draw(surface)?;

        Ok(TickControl::Continue)
    }

    //--- Event Dispatch ---------------------------------------------------

    /// Applies the action bound to `event`.
    pub fn handle_app_event(&mut self, event: AppEvent) -> TickControl {
        debug!(target: "game", "Handling {:?}", event);

        match event {
            AppEvent::MainMenuPlay => self.enter(GameStates::Gameplay),
            AppEvent::MainMenuOptions => self.enter(GameStates::OptionsMenu),
            AppEvent::OptionsMenuToggleFullscreen => {
                self.display_requests.push(DisplayRequest::ToggleFullscreen);
                self.max_fps = self.config.menu_fps;
            }
            AppEvent::OptionsMenuGoBack => {
                self.states.go_back();
                self.max_fps = self.config.menu_fps;
            }
            AppEvent::GameplayPause => self.enter(GameStates::PauseMenu),
            AppEvent::PauseMenuResume => self.enter(GameStates::Gameplay),
            AppEvent::PauseMenuGotoMainMenu => self.enter(GameStates::MainMenu),
            AppEvent::IntroFinished => self.enter(GameStates::MainMenu),
            AppEvent::Quit => {
                info!(target: "game", "Quit requested");
                return TickControl::Exit;
            }
        }

        TickControl::Continue
    }

    /// Switches to `state` and applies its frame cap.
    fn enter(&mut self, state: GameStates) {
        self.states.change_state(state);
        self.max_fps = match state {
            GameStates::Gameplay => self.config.gameplay_fps,
            _ => self.config.menu_fps,
        };
    }

    //--- Queries ----------------------------------------------------------

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Frame cap for the current state.
    pub fn max_fps(&self) -> u32 {
        self.max_fps
    }

    pub fn current_state(&self) -> Option<GameStates> {
        self.states.current()
    }

    /// Producer handle for posting events from outside the game.
    pub fn event_sender(&self) -> EventSender {
        self.events.sender()
    }

    /// Takes the window changes requested since the last call.
    pub fn take_display_requests(&mut self) -> Vec<DisplayRequest> {
        std::mem::take(&mut self.display_requests)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
