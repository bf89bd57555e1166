//=========================================================================
// Gameplay
//=========================================================================
//
// The card table: a flippable card and a ball bouncing around the
// screen. Escape pauses the game.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::assets;
use crate::core::assets::{AssetError, AssetManager};
use crate::core::events::AppEvent;
use crate::core::globals::GlobalContext;
use crate::core::input::{KeyCode, StateTracker};
use crate::core::render::{Color, Image, Rect, Surface};
use crate::core::state::GameState;

//=== Ball ================================================================

/// Red ball moving diagonally and reflecting off the screen edges.
#[derive(Debug, Clone)]
pub struct Ball {
    image: Image,
    position: (f32, f32),
    velocity: (f32, f32),
}

impl Ball {
    pub const DIAMETER: u32 = 24;
    pub const SPEED: f32 = 400.0;

    pub fn new() -> Self {
        Self {
            image: Image::circle(Self::DIAMETER, Color::RED),
            position: (0.0, 0.0),
            velocity: (Self::SPEED, Self::SPEED),
        }
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = (x, y);
        self
    }

    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    pub fn velocity(&self) -> (f32, f32) {
        self.velocity
    }

    /// Moves the ball and reflects it off any edge of `bounds` it crossed.
    pub fn update(&mut self, dt: f32, bounds: (u32, u32)) {
        let size = Self::DIAMETER as f32;
        let max_x = (bounds.0 as f32 - size).max(0.0);
        let max_y = (bounds.1 as f32 - size).max(0.0);

        let (mut x, mut y) = self.position;
        x += self.velocity.0 * dt;
        y += self.velocity.1 * dt;

        if x < 0.0 || x > max_x {
            self.velocity.0 = -self.velocity.0;
            x = x.clamp(0.0, max_x);
            trace!(target: "game", "Ball bounced horizontally at x={}", x);
        }
        if y < 0.0 || y > max_y {
            self.velocity.1 = -self.velocity.1;
            y = y.clamp(0.0, max_y);
            trace!(target: "game", "Ball bounced vertically at y={}", y);
        }

        self.position = (x, y);
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let rect = self.image.rect().at(self.position.0 as i32, self.position.1 as i32);
        surface.blit(&self.image, rect, 255);
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

//=== Card ================================================================

/// Which side of a [`Card`] is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardFace {
    Up,
    Down,
}

/// Playing card that flips when Space is pressed.
#[derive(Debug, Clone)]
pub struct Card {
    face: Image,
    back: Image,
    rect: Rect,
    showing: CardFace,

    /// Seconds left in the current flip, if flipping.
    flip_remaining: Option<f32>,
}

impl Card {
    /// Duration of a flip, in seconds.
    pub const FLIP_TIME: f32 = 1.0;

    pub fn new(face: Image, back: Image, showing: CardFace) -> Self {
        let rect = face.rect();
        Self {
            face,
            back,
            rect,
            showing,
            flip_remaining: None,
        }
    }

    pub fn centered_in(mut self, screen_size: (u32, u32)) -> Self {
        let x = (screen_size.0 as i32 - self.rect.width as i32) / 2;
        let y = (screen_size.1 as i32 - self.rect.height as i32) / 2;
        self.rect = self.rect.at(x, y);
        self
    }

    pub fn showing(&self) -> CardFace {
        self.showing
    }

    pub fn is_flipping(&self) -> bool {
        self.flip_remaining.is_some()
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Starts a flip on Space and advances a running one.
    ///
    /// The visible side switches as the flip starts; further presses are
    /// ignored until it completes.
    pub fn update(&mut self, input: &StateTracker, dt: f32) {
        if let Some(remaining) = self.flip_remaining {
            let remaining = remaining - dt;
            self.flip_remaining = (remaining > 0.0).then_some(remaining);
            return;
        }

        if input.is_key_pressed(KeyCode::Space) {
            self.showing = match self.showing {
                CardFace::Up => CardFace::Down,
                CardFace::Down => CardFace::Up,
            };
            self.flip_remaining = Some(Self::FLIP_TIME);
            debug!(target: "game", "Card flipping to {:?}", self.showing);
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let image = match self.showing {
            CardFace::Up => &self.face,
            CardFace::Down => &self.back,
        };
        surface.blit(image, self.rect, 255);
    }
}

//=== GameplayState =======================================================

/// The table scene shown while playing.
pub struct GameplayState {
    card: Card,
    ball: Ball,
}

impl GameplayState {
    pub fn new(assets: &AssetManager, screen_size: (u32, u32)) -> Result<Self, AssetError> {
        let face = assets.get_texture(assets::TABLE_CARD)?.clone();
        let back = assets.get_texture(assets::TABLE_CARD_BACK)?.clone();

        Ok(Self {
            card: Card::new(face, back, CardFace::Up).centered_in(screen_size),
            ball: Ball::new(),
        })
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }
}

//=== GameState Implementation ============================================

impl GameState for GameplayState {
    fn update(&mut self, context: &GlobalContext, dt: f32) {
        self.ball.update(dt, context.screen_size);
        self.card.update(&context.input_state, dt);

        if context.input_state.is_key_pressed(KeyCode::Escape) {
            context.post(AppEvent::GameplayPause);
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill(Color::TABLE_GREEN);
        self.card.draw(surface);
        self.ball.draw(surface);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
