//=========================================================================
// Game State System
//=========================================================================
//
// Mutually exclusive game states (menus, gameplay, pause) with a single
// active state.
//
// Architecture:
//   StateManager
//     ├─ states: HashMap<K, Box<dyn GameState>>
//     ├─ current: Option<K>
//     └─ previous: Option<K>
//
// Flow:
//   update()/draw() → states[current]
//   change_state()/go_back() → move current, remember previous
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;
use crate::core::render::Surface;

//=== Module Declarations =================================================

mod state_manager;

//=== Public API ==========================================================

pub use state_manager::{StateError, StateManager};

//=== State Key Trait =====================================================

/// Marker trait for state identifiers.
///
/// Typically implemented by game-specific enums; `&'static str` works
/// for ad-hoc keys.
pub trait StateKey: Clone + Copy + Eq + Hash + Debug + 'static {}

impl StateKey for &'static str {}

//=== GameState Trait =====================================================

/// A state registered with the [`StateManager`].
///
/// Only the current state is updated and drawn each frame. States keep
/// their data between activations because the manager never drops them.
pub trait GameState {
    /// Called every frame while this is the current state.
    fn update(&mut self, context: &GlobalContext, dt: f32);

    /// Draws the state onto `surface`.
    fn draw(&self, surface: &mut dyn Surface);
}
