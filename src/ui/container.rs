//=========================================================================
// UI Container
//=========================================================================
//
// Vertical stack of buttons centered on the screen. A container is a
// complete menu screen and is registered with the state manager as-is.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use super::Button;
use crate::core::globals::GlobalContext;
use crate::core::render::Surface;
use crate::core::state::GameState;

//=== UiContainer =========================================================

/// Buttons laid out top to bottom around the screen center.
#[derive(Debug, Clone)]
pub struct UiContainer {
    buttons: Vec<Button>,
    y_padding: u32,
}

impl UiContainer {
    /// Default vertical gap between buttons.
    pub const DEFAULT_Y_PADDING: u32 = 10;

    /// Creates a container and centers `buttons` within `screen_size`.
    pub fn new(buttons: Vec<Button>, screen_size: (u32, u32)) -> Self {
        Self::with_y_padding(buttons, screen_size, Self::DEFAULT_Y_PADDING)
    }

    pub fn with_y_padding(buttons: Vec<Button>, screen_size: (u32, u32), y_padding: u32) -> Self {
        let mut container = Self { buttons, y_padding };
        container.layout(screen_size);
        container
    }

    /// Recenters every button within `screen_size`.
    pub fn layout(&mut self, screen_size: (u32, u32)) {
        let center_x = screen_size.0 as f32 / 2.0;
        let center_y = screen_size.1 as f32 / 2.0;

        let gaps = self.buttons.len().saturating_sub(1) as u32;
        let total_height: u32 =
            self.buttons.iter().map(|b| b.size().1).sum::<u32>() + gaps * self.y_padding;

        let mut y = center_y - total_height as f32 / 2.0;
        for button in &mut self.buttons {
            let (width, height) = button.size();
            let x = center_x - width as f32 / 2.0;
            button.set_position(x as i32, y as i32);
            y += (height + self.y_padding) as f32;
        }
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn y_padding(&self) -> u32 {
        self.y_padding
    }
}

//=== GameState Implementation ============================================

impl GameState for UiContainer {
    fn update(&mut self, context: &GlobalContext, _dt: f32) {
        for button in &mut self.buttons {
            if let Some(event) = button.update(&context.input_state) {
                trace!(target: "game::ui", "Posting {:?}", event);
                context.post(event);
            }
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        for button in &self.buttons {
            button.draw(surface);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
