//=========================================================================
// User Interface
//=========================================================================
//
// Immediate-update widgets driven by the per-frame input state.
//
// Architecture:
//   UiContainer (GameState)
//     └─ buttons: Vec<Button> ──update()──> Option<AppEvent> ──post()──> EventQueue
//
//=========================================================================

//=== Module Declarations =================================================

mod button;
mod container;
pub mod menus;

//=== Public API ==========================================================

pub use button::{Button, ButtonState, ButtonStyle};
pub use container::UiContainer;
