//=========================================================================
// Game States
//=========================================================================
//
// Keys and implementations of the game's top-level states.
//
// Flow:
//   Intro ──IntroFinished──> MainMenu ──Play──> Gameplay ──Escape──> PauseMenu
//                              │  ▲                ▲                   │
//                       Options│  │Go Back         └──────Resume───────┤
//                              ▼  │                                    │
//                           OptionsMenu              MainMenu <──Quit──┘
//
//=========================================================================

//=== Module Declarations =================================================

mod gameplay;
mod intro;

//=== Public API ==========================================================

pub use gameplay::{Ball, Card, CardFace, GameplayState};
pub use intro::IntroState;

//=== Internal Dependencies ===============================================

use crate::core::state::StateKey;

//=== GameStates ==========================================================

/// Identifies each registered game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStates {
    Intro,
    MainMenu,
    OptionsMenu,
    Gameplay,
    PauseMenu,
}

impl StateKey for GameStates {}
