//=========================================================================
// State Manager
//=========================================================================
//
// Keyed registry of game states plus current/previous pointers.
//
// History semantics:
// - The first added state becomes current; later adds never move it.
// - Every add and every change overwrites `previous` with the old
//   `current`, so `go_back()` toggles between the last two states
//   instead of walking a history stack.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::{GameState, StateKey};
use crate::core::globals::GlobalContext;
use crate::core::render::Surface;

//=== StateError ==========================================================

/// Lookup failures when dispatching to the current state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// No state has been added yet.
    #[error("no current state")]
    NoCurrentState,

    /// The current key names no registered state.
    #[error("state {0} is not registered")]
    NotRegistered(String),
}

//=== StateManager ========================================================

/// Owns game states and dispatches update/draw to the current one.
pub struct StateManager<K: StateKey> {
    states: HashMap<K, Box<dyn GameState>>,
    current: Option<K>,
    previous: Option<K>,
}

impl<K: StateKey> StateManager<K> {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            current: None,
            previous: None,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers `state` under `key`.
    ///
    /// The first key ever added becomes the current state. Every call also
    /// sets `previous` to the current state at the time of the call (`None`
    /// on the very first add).
    pub fn add<T>(&mut self, key: K, state: T)
    where
        T: GameState + 'static,
    {
        self.previous = self.current;
        if self.current.is_none() {
            debug!(target: "game::state", "State {:?} is the initial state", key);
            self.current = Some(key);
        }

        if self.states.insert(key, Box::new(state)).is_some() {
            warn!(target: "game::state", "State {:?} was already registered and has been replaced", key);
        }
    }

    //--- Transitions ------------------------------------------------------

    /// Makes `key` the current state.
    ///
    /// Does nothing until at least one state has been added. The key is not
    /// validated here; an unregistered key surfaces as
    /// [`StateError::NotRegistered`] on the next update or draw.
    pub fn change_state(&mut self, key: K) {
        let Some(current) = self.current else {
            debug!(target: "game::state", "Ignoring change to {:?}: no current state", key);
            return;
        };

        debug!(target: "game::state", "Changing state {:?} -> {:?}", current, key);
        self.previous = Some(current);
        self.current = Some(key);
    }

    /// Returns to the previous state, if any.
    ///
    /// The state being left becomes the new `previous`, so two consecutive
    /// calls return to where they started.
    pub fn go_back(&mut self) {
        if let Some(previous) = self.previous {
            self.change_state(previous);
        }
    }

    //--- Dispatch ---------------------------------------------------------

    /// Updates the current state.
    pub fn update(&mut self, context: &GlobalContext, dt: f32) -> Result<(), StateError> {
        let key = self.current.ok_or(StateError::NoCurrentState)?;
        let state = self
            .states
            .get_mut(&key)
            .ok_or_else(|| StateError::NotRegistered(format!("{:?}", key)))?;

        state.update(context, dt);
        Ok(())
    }

    /// Draws the current state.
    pub fn draw(&self, surface: &mut dyn Surface) -> Result<(), StateError> {
        let key = self.current.ok_or(StateError::NoCurrentState)?;
        let state = self
            .states
            .get(&key)
            .ok_or_else(|| StateError::NotRegistered(format!("{:?}", key)))?;

        state.draw(surface);
        Ok(())
    }

    //--- Queries ----------------------------------------------------------

    pub fn current(&self) -> Option<K> {
        self.current
    }

    pub fn previous(&self) -> Option<K> {
        self.previous
    }

    /// Returns `true` if a state is registered under `key`.
    pub fn contains(&self, key: K) -> bool {
        self.states.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<K: StateKey> Default for StateManager<K> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
