//=========================================================================
// Input Buffer
//
// Collects input events between two redraws, split into discrete and
// continuous events, and hands them to the game as one frame batch.
//
// Responsibilities:
// - Drop consecutive duplicate discrete inputs (e.g., KeyDown repeat)
// - Coalesce continuous inputs (MouseMoved keeps only the latest)
// - Hand out the frame's events via `drain()`, discrete first
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::collections::HashSet;

//=== Internal Modules ====================================================
use crate::core::input::InputEvent;

//=== InputBuffer Struct ==================================================
//
// Internally maintains:
// - `discrete`: ordered one-shot inputs (key and button transitions)
// - `continuous`: last-known state of continuous inputs (cursor)
//
pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: HashSet<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 64;
        const CONTINUOUS_BASE: usize = 4;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            continuous: HashSet::with_capacity(CONTINUOUS_BASE),
        }
    }

    //--- Event Handling ---------------------------------------------------

    /// Stores a continuous input, replacing any earlier one of its kind.
    pub(crate) fn push_continuous(&mut self, event: InputEvent) {
        self.continuous.replace(event);
    }

    /// Appends a discrete input unless it repeats the previous one.
    pub(crate) fn push_discrete(&mut self, event: InputEvent) {
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------

    /// Returns this frame's events and empties the buffer.
    pub(crate) fn drain(&mut self) -> Vec<InputEvent> {
        let mut events: Vec<InputEvent> = self.discrete.drain(..).collect();
        events.extend(self.continuous.drain());
        events
    }

    //--- Utilities --------------------------------------------------------
    pub(crate) fn len(&self) -> usize {
        self.discrete.len() + self.continuous.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.continuous.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
