//=========================================================================
// State Tracker
//=========================================================================
//
// Low-level input state with per-frame deltas.
//
// Architecture:
//   InputEvent → process_events() → HashSet (keys/buttons held) → query
//
// Frame lifecycle: begin_frame() → process_events() → query
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, MouseButton};

//=== StateTracker ========================================================

/// Tracks persistent state (keys held) and per-frame deltas (keys pressed/released).
#[derive(Debug, Default)]
pub struct StateTracker {
    //--- Persistent State (survives frame boundary) ----------------------
    keys_down: HashSet<KeyCode>,
    mouse_buttons_down: HashSet<MouseButton>,
    mouse_position: (f32, f32),

    //--- Frame Deltas (reset each frame via begin_frame()) ---------------
    keys_pressed_this_frame: HashSet<KeyCode>,
    keys_released_this_frame: HashSet<KeyCode>,
    mouse_buttons_pressed_this_frame: HashSet<MouseButton>,
    mouse_buttons_released_this_frame: HashSet<MouseButton>,
}

impl StateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears frame-specific deltas (pressed/released flags).
    pub(crate) fn begin_frame(&mut self) {
        self.keys_pressed_this_frame.clear();
        self.keys_released_this_frame.clear();
        self.mouse_buttons_pressed_this_frame.clear();
        self.mouse_buttons_released_this_frame.clear();
    }

    /// Applies this frame's input events.
    pub(crate) fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn process_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown(key) => {
                // Only mark as pressed if it wasn't already down (OS key repeat)
                if self.keys_down.insert(key) {
                    self.keys_pressed_this_frame.insert(key);
                }
            }

            InputEvent::KeyUp(key) => {
                if self.keys_down.remove(&key) {
                    self.keys_released_this_frame.insert(key);
                }
            }

            InputEvent::MouseButtonDown(button) => {
                if self.mouse_buttons_down.insert(button) {
                    self.mouse_buttons_pressed_this_frame.insert(button);
                }
            }

            InputEvent::MouseButtonUp(button) => {
                if self.mouse_buttons_down.remove(&button) {
                    self.mouse_buttons_released_this_frame.insert(button);
                }
            }

            InputEvent::MouseMoved { x, y } => {
                self.mouse_position = (x, y);
            }
        }
    }

    //=====================================================================
    // Query API - Keyboard
    //=====================================================================

    /// Returns `true` if key transitioned UP → DOWN this frame.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed_this_frame.contains(&key)
    }

    /// Returns `true` while key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` if key transitioned DOWN → UP this frame.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released_this_frame.contains(&key)
    }

    //=====================================================================
    // Query API - Mouse
    //=====================================================================

    /// Like [`is_key_pressed`](Self::is_key_pressed) but for mouse buttons.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons_pressed_this_frame.contains(&button)
    }

    /// Like [`is_key_down`](Self::is_key_down) but for mouse buttons.
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons_down.contains(&button)
    }

    /// Like [`is_key_released`](Self::is_key_released) but for mouse buttons.
    pub fn is_button_released(&self, button: MouseButton) -> bool {
        self.mouse_buttons_released_this_frame.contains(&button)
    }

    /// Cursor position in canvas pixels.
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(tracker: &mut StateTracker, events: &[InputEvent]) {
        tracker.begin_frame();
        tracker.process_events(events);
    }

    #[test]
    fn key_press_is_edge_triggered() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[InputEvent::KeyDown(KeyCode::Escape)]);
        assert!(tracker.is_key_pressed(KeyCode::Escape));
        assert!(tracker.is_key_down(KeyCode::Escape));

        frame(&mut tracker, &[]);
        assert!(!tracker.is_key_pressed(KeyCode::Escape), "Pressed lasts one frame");
        assert!(tracker.is_key_down(KeyCode::Escape), "Held state persists");
    }

    #[test]
    fn key_repeat_does_not_retrigger_press() {
        let mut tracker = StateTracker::new();
        frame(&mut tracker, &[InputEvent::KeyDown(KeyCode::Space)]);
        frame(&mut tracker, &[InputEvent::KeyDown(KeyCode::Space)]);
        assert!(!tracker.is_key_pressed(KeyCode::Space));
    }

    #[test]
    fn key_release_only_counts_if_held() {
        let mut tracker = StateTracker::new();
        frame(&mut tracker, &[InputEvent::KeyUp(KeyCode::Space)]);
        assert!(!tracker.is_key_released(KeyCode::Space));

        frame(&mut tracker, &[InputEvent::KeyDown(KeyCode::Space)]);
        frame(&mut tracker, &[InputEvent::KeyUp(KeyCode::Space)]);
        assert!(tracker.is_key_released(KeyCode::Space));
        assert!(!tracker.is_key_down(KeyCode::Space));
    }

    #[test]
    fn mouse_buttons_track_down_and_release() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[InputEvent::MouseButtonDown(MouseButton::Left)]);
        assert!(tracker.is_button_pressed(MouseButton::Left));
        assert!(tracker.is_button_down(MouseButton::Left));

        frame(&mut tracker, &[InputEvent::MouseButtonUp(MouseButton::Left)]);
        assert!(tracker.is_button_released(MouseButton::Left));
        assert!(!tracker.is_button_down(MouseButton::Left));
    }

    #[test]
    fn mouse_position_keeps_last_move() {
        let mut tracker = StateTracker::new();
        frame(
            &mut tracker,
            &[
                InputEvent::MouseMoved { x: 1.0, y: 2.0 },
                InputEvent::MouseMoved { x: 30.0, y: 40.0 },
            ],
        );
        frame(&mut tracker, &[]);
        assert_eq!(tracker.mouse_position(), (30.0, 40.0));
    }
}
