//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use blackjack::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Game facade
pub use crate::{Game, GameBuilder, GameError};

// Events and shared context
pub use crate::core::events::{AppEvent, TickControl};
pub use crate::core::globals::GlobalContext;

// Input
pub use crate::core::input::{KeyCode, MouseButton};

// Rendering
pub use crate::core::render::{Color, Image, Rect, Surface};

// States and scenes
pub use crate::core::scene::{Scene, SceneBehavior, SceneSequencer, SceneState, TimedSlide};
pub use crate::core::state::{GameState, StateKey, StateManager};
