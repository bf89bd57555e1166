//=========================================================================
// Button
//=========================================================================
//
// Clickable label that reports an application event when released.
//
// State transitions (left mouse button):
//   hovered   & newly pressed        → Pressed
//   Pressed   & released, hovered    → Hovered (fires event)
//   hovered   & not held             → Hovered
//   not hovered                      → Default
//
// Labels are drawn as one block per glyph cell; there is no font
// rendering, so the button size derives from the label length.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::events::AppEvent;
use crate::core::input::{MouseButton, StateTracker};
use crate::core::render::{Color, Rect, Surface};

//=== ButtonState =========================================================

/// Visual/interaction state of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonState {
    #[default]
    Default,
    Hovered,
    Pressed,
}

//=== ButtonStyle =========================================================

/// Colors and spacing of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyle {
    pub label_color: Color,
    pub bg_color: Color,
    pub hover_color: Color,
    pub press_color: Color,

    /// Horizontal and vertical space around the label, in pixels.
    pub padding: (u32, u32),
}

impl ButtonStyle {
    /// Size of one label glyph cell.
    pub const GLYPH_SIZE: (u32, u32) = (10, 18);

    /// Background color for `state`.
    pub fn background(&self, state: ButtonState) -> Color {
        match state {
            ButtonState::Default => self.bg_color,
            ButtonState::Hovered => self.hover_color,
            ButtonState::Pressed => self.press_color,
        }
    }
}

impl Default for ButtonStyle {
    /// Green menu style.
    fn default() -> Self {
        Self {
            label_color: Color::WHITE,
            bg_color: Color::rgb(0x18, 0x8d, 0x46),
            hover_color: Color::rgb(0x66, 0xb0, 0x83),
            press_color: Color::rgb(0x46, 0x5f, 0x50),
            padding: (40, 20),
        }
    }
}

//=== Button ==============================================================

/// A labelled button posting an optional [`AppEvent`] on click.
#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    style: ButtonStyle,
    state: ButtonState,
    rect: Rect,
    on_pressed: Option<AppEvent>,
}

impl Button {
    //--- Construction -----------------------------------------------------

    /// Creates a button at the origin, sized to fit `label`.
    pub fn new(label: impl Into<String>, style: ButtonStyle, on_pressed: Option<AppEvent>) -> Self {
        let label = label.into();
        let (glyph_w, glyph_h) = ButtonStyle::GLYPH_SIZE;
        let label_width = glyph_w * label.chars().count() as u32;

        let rect = Rect::from_size(
            label_width + 2 * style.padding.0,
            glyph_h + 2 * style.padding.1,
        );

        Self {
            label,
            style,
            state: ButtonState::Default,
            rect,
            on_pressed,
        }
    }

    //--- Layout -----------------------------------------------------------

    /// Moves the button's top-left corner to `(x, y)`.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.rect = self.rect.at(x, y);
    }

    pub fn position(&self) -> (i32, i32) {
        (self.rect.x, self.rect.y)
    }

    pub fn size(&self) -> (u32, u32) {
        (self.rect.width, self.rect.height)
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    //--- Queries ----------------------------------------------------------

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Returns `true` if `(x, y)` lies on the button, edges included.
    pub fn is_hovered(&self, x: f32, y: f32) -> bool {
        self.rect.contains(x, y)
    }

    //--- Update & Draw ----------------------------------------------------

    /// Advances the button state from this frame's input.
    ///
    /// Returns the button's event on the frame a click completes.
    pub fn update(&mut self, input: &StateTracker) -> Option<AppEvent> {
        let (x, y) = input.mouse_position();
        let held = input.is_button_down(MouseButton::Left);
        let newly_pressed = input.is_button_pressed(MouseButton::Left);

        if !self.is_hovered(x, y) {
            self.state = ButtonState::Default;
            return None;
        }

        match self.state {
            state if state != ButtonState::Pressed && newly_pressed => {
                self.state = ButtonState::Pressed;
                None
            }
            ButtonState::Pressed if !held => {
                self.state = ButtonState::Hovered;
                debug!(target: "game::ui", "Button \"{}\" clicked", self.label);
                self.on_pressed
            }
            ButtonState::Default if !held => {
                self.state = ButtonState::Hovered;
                None
            }
            _ => None,
        }
    }

    /// Draws the background and the label's glyph blocks.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.rect, self.style.background(self.state));

        let (glyph_w, glyph_h) = ButtonStyle::GLYPH_SIZE;
        let origin_x = self.rect.x + self.style.padding.0 as i32;
        let origin_y = self.rect.y + self.style.padding.1 as i32;

        for (i, ch) in self.label.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let cell = Rect::new(origin_x + (i as u32 * glyph_w) as i32 + 1, origin_y + 2, glyph_w - 2, glyph_h - 4);
            surface.fill_rect(cell, self.style.label_color);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
