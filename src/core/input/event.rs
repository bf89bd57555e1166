//=========================================================================
// Input Event Types
//
// Platform-neutral representation of the keyboard and mouse input the
// game reacts to.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (per-frame held/pressed/released sets)
//         ↓
//    Widgets & game states
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::hash::{Hash, Hasher};

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// Buttons only react to the primary button; others are filtered out by
/// the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Only keys the game binds are listed; everything else is filtered out
/// by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Flips the card during gameplay.
    Space,

    /// Pauses gameplay.
    Escape,
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// # Equality & Hashing Semantics
///
/// Events compare by type and payload, except `MouseMoved`, which compares
/// equal regardless of coordinates so repeated moves coalesce to the last
/// position.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    MouseButtonDown(MouseButton),
    MouseButtonUp(MouseButton),

    /// Cursor position in canvas pixels (top-left origin).
    MouseMoved { x: f32, y: f32 },
}

impl InputEvent {
    /// Continuous events carry state that only matters at its latest value.
    pub fn is_continuous(&self) -> bool {
        matches!(self, InputEvent::MouseMoved { .. })
    }
}

//--- Equality & Hashing --------------------------------------------------

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (KeyDown(a), KeyDown(b)) => a == b,
            (KeyUp(a), KeyUp(b)) => a == b,
            (MouseButtonDown(a), MouseButtonDown(b)) => a == b,
            (MouseButtonUp(a), MouseButtonUp(b)) => a == b,
            (MouseMoved { .. }, MouseMoved { .. }) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            InputEvent::KeyDown(key) | InputEvent::KeyUp(key) => key.hash(state),
            InputEvent::MouseButtonDown(button) | InputEvent::MouseButtonUp(button) => {
                button.hash(state)
            }
            InputEvent::MouseMoved { .. } => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn mouse_moves_compare_equal() {
        let a = InputEvent::MouseMoved { x: 1.0, y: 2.0 };
        let b = InputEvent::MouseMoved { x: 300.0, y: 400.0 };
        assert_eq!(a, b, "MouseMoved should ignore coordinates");
    }

    #[test]
    fn key_events_compare_payload() {
        assert_eq!(InputEvent::KeyDown(KeyCode::Escape), InputEvent::KeyDown(KeyCode::Escape));
        assert_ne!(InputEvent::KeyDown(KeyCode::Escape), InputEvent::KeyDown(KeyCode::Space));
        assert_ne!(InputEvent::KeyDown(KeyCode::Escape), InputEvent::KeyUp(KeyCode::Escape));
    }

    #[test]
    fn hashset_replaces_continuous_event() {
        let mut set = HashSet::new();
        set.insert(InputEvent::MouseMoved { x: 10.0, y: 10.0 });
        set.replace(InputEvent::MouseMoved { x: 20.0, y: 30.0 });

        assert_eq!(set.len(), 1, "HashSet should keep only latest MouseMoved");
        match set.iter().next() {
            Some(InputEvent::MouseMoved { x, y }) => assert_eq!((*x, *y), (20.0, 30.0)),
            other => panic!("Expected MouseMoved, got {:?}", other),
        }
    }

    #[test]
    fn continuous_classification() {
        assert!(InputEvent::MouseMoved { x: 0.0, y: 0.0 }.is_continuous());
        assert!(!InputEvent::MouseButtonDown(MouseButton::Left).is_continuous());
    }
}
