//=========================================================================
// Input Processor
//=========================================================================
//
// Converts platform-specific Winit events into game InputEvents.
//
// Architecture:
//   Winit Events → InputProcessor → InputEvent (game type) → InputBuffer
//
// Keys and buttons the game does not bind are filtered (returns None).
// Cursor positions arrive already mapped to canvas pixels.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::ElementState,
    event::{KeyEvent, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode, MouseButton};

//=== InputProcessor ======================================================

/// Converts Winit events to game InputEvents.
#[derive(Debug, Default)]
pub(crate) struct InputProcessor;

impl InputProcessor {
    pub(crate) fn new() -> Self {
        Self
    }

    //--- Event Processing -------------------------------------------------

    /// Converts a Winit KeyEvent to an InputEvent (filters unmapped keys).
    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        let PhysicalKey::Code(code) = key_event.physical_key else {
            return None;
        };
        self.process_key(code, key_event.state)
    }

    /// Converts a physical key transition (filters unmapped keys).
    pub(crate) fn process_key(&self, code: WinitKeyCode, state: ElementState) -> Option<InputEvent> {
        let key = game_key(code)?;

        Some(match state {
            ElementState::Pressed => InputEvent::KeyDown(key),
            ElementState::Released => InputEvent::KeyUp(key),
        })
    }

    /// Converts a Winit mouse button event (filters unbound buttons).
    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> Option<InputEvent> {
        let button = game_button(button)?;

        Some(match state {
            ElementState::Pressed => InputEvent::MouseButtonDown(button),
            ElementState::Released => InputEvent::MouseButtonUp(button),
        })
    }

    /// Creates a mouse move event (canvas pixels).
    pub(crate) fn process_mouse_move(&self, x: f32, y: f32) -> InputEvent {
        InputEvent::MouseMoved { x, y }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Maps the Winit keys the game binds; everything else is `None`.
fn game_key(code: WinitKeyCode) -> Option<KeyCode> {
    match code {
        WinitKeyCode::Space => Some(KeyCode::Space),
        WinitKeyCode::Escape => Some(KeyCode::Escape),
        _ => None,
    }
}

/// Maps the primary button; everything else is `None`.
fn game_button(button: WinitMouseButton) -> Option<MouseButton> {
    match button {
        WinitMouseButton::Left => Some(MouseButton::Left),
        _ => None,
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_press_and_release() {
        let processor = InputProcessor::new();

        assert_eq!(
            processor.process_key(WinitKeyCode::Escape, ElementState::Pressed),
            Some(InputEvent::KeyDown(KeyCode::Escape))
        );
        assert_eq!(
            processor.process_key(WinitKeyCode::Space, ElementState::Released),
            Some(InputEvent::KeyUp(KeyCode::Space))
        );
    }

    #[test]
    fn unmapped_keys_are_filtered() {
        let processor = InputProcessor::new();
        assert_eq!(processor.process_key(WinitKeyCode::F13, ElementState::Pressed), None);
        assert_eq!(processor.process_key(WinitKeyCode::KeyA, ElementState::Pressed), None);
        assert_eq!(processor.process_key(WinitKeyCode::Enter, ElementState::Pressed), None);
        assert_eq!(processor.process_key(WinitKeyCode::ArrowLeft, ElementState::Released), None);
    }

    #[test]
    fn mouse_button_events() {
        let processor = InputProcessor::new();

        assert_eq!(
            processor.process_mouse_button(WinitMouseButton::Left, ElementState::Pressed),
            Some(InputEvent::MouseButtonDown(MouseButton::Left))
        );
        assert_eq!(
            processor.process_mouse_button(WinitMouseButton::Left, ElementState::Released),
            Some(InputEvent::MouseButtonUp(MouseButton::Left))
        );
    }

    #[test]
    fn unbound_mouse_buttons_are_filtered() {
        let processor = InputProcessor::new();
        assert_eq!(processor.process_mouse_button(WinitMouseButton::Right, ElementState::Pressed), None);
        assert_eq!(processor.process_mouse_button(WinitMouseButton::Middle, ElementState::Pressed), None);
        assert_eq!(processor.process_mouse_button(WinitMouseButton::Back, ElementState::Released), None);
    }

    #[test]
    fn mouse_move_correct() {
        let processor = InputProcessor::new();
        match processor.process_mouse_move(123.5, 456.7) {
            InputEvent::MouseMoved { x, y } => {
                assert_eq!(x, 123.5);
                assert_eq!(y, 456.7);
            }
            other => panic!("Expected MouseMoved, got {:?}", other),
        }
    }
}
