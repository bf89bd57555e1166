//=========================================================================
// Global Context
//=========================================================================
//
// Shared per-frame data handed to game states during updates.
//
// Contains:
// - input_state: Low-level input state (keys, mouse buttons, cursor)
// - events: Producer handle for application events
// - screen_size: Canvas size used for layout and bounds
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::events::{AppEvent, EventSender};
use crate::core::input::StateTracker;

//=== GlobalContext =======================================================

/// Shared context data accessible to game states during updates.
pub struct GlobalContext {
    /// Held / pressed / released input for the current frame.
    pub input_state: StateTracker,

    /// Posts application events for the next dispatch.
    pub events: EventSender,

    /// Canvas size as `(width, height)`.
    pub screen_size: (u32, u32),
}

impl GlobalContext {
    /// Creates a context with empty input state.
    pub fn new(events: EventSender, screen_size: (u32, u32)) -> Self {
        Self {
            input_state: StateTracker::new(),
            events,
            screen_size,
        }
    }

    /// Shorthand for `self.events.post(event)`.
    pub fn post(&self, event: AppEvent) {
        self.events.post(event);
    }
}
