//=========================================================================
// Application Events
//=========================================================================
//
// Signals posted by widgets and game states, consumed once per frame by
// the game loop's dispatcher.
//
// Architecture:
//   Button / Gameplay / Intro ──post()──> EventQueue ──drain_frame()──> Game
//                (EventSender)                                      │
//                                                  handle_app_event()
//                                                           ↓
//                                          StateManager::change_state / go_back
//
//=========================================================================

//=== Module Declarations =================================================

mod event_queue;

//=== Public API ==========================================================

pub use event_queue::{EventQueue, EventSender};

//=== AppEvent ============================================================

/// Application-defined event kinds.
///
/// Producers (widgets, states) and the consumer (the game loop) share this
/// enum directly; each variant maps to exactly one dispatcher action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppEvent {
    /// "Play" pressed on the main menu.
    MainMenuPlay,

    /// "Options" pressed on the main menu.
    MainMenuOptions,

    /// "Toggle Fullscreen" pressed on the options menu.
    OptionsMenuToggleFullscreen,

    /// "Go Back" pressed on the options menu.
    OptionsMenuGoBack,

    /// Pause requested during gameplay.
    GameplayPause,

    /// "Resume" pressed on the pause menu.
    PauseMenuResume,

    /// "Quit" pressed on the pause menu.
    PauseMenuGotoMainMenu,

    /// The intro scene sequence has played out.
    IntroFinished,

    /// Shut the game down.
    Quit,
}

//=== TickControl =========================================================

/// Game loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}
