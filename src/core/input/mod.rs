//=========================================================================
// Input
//=========================================================================
//
// Platform-neutral input events and the per-frame state built from them.
//
// Architecture:
//   Platform → Vec<InputEvent> → StateTracker → widgets / game states
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
mod state_tracker;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, MouseButton};
pub use state_tracker::StateTracker;
