//=========================================================================
// Intro
//=========================================================================
//
// Plays the splash, framework and credits slides back to back, then asks
// the game to move on to the main menu.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::assets;
use crate::core::assets::{AssetError, AssetManager};
use crate::core::events::AppEvent;
use crate::core::globals::GlobalContext;
use crate::core::render::{Color, Surface};
use crate::core::scene::{Scene, SceneSequencer, TimedSlide};
use crate::core::state::GameState;

//=== IntroState ==========================================================

/// Sequence of timed slides shown at startup.
pub struct IntroState {
    sequencer: SceneSequencer,
    finished: bool,
}

impl IntroState {
    /// Slides in playback order.
    pub const SLIDES: [&'static str; 3] = [assets::SPLASH, assets::FRAMEWORK_SLIDE, assets::CREDITS_SLIDE];

    /// Queues every intro slide, centered within `screen_size`.
    pub fn new(assets: &AssetManager, screen_size: (u32, u32)) -> Result<Self, AssetError> {
        let mut sequencer = SceneSequencer::new().with_fallback(Color::BLACK);

        for name in Self::SLIDES {
            let image = assets.get_texture(name)?.clone();
            sequencer.add(Scene::new(image, TimedSlide::default()).centered_in(screen_size));
        }

        Ok(Self::from_sequencer(sequencer))
    }

    /// Wraps an already filled sequencer.
    pub fn from_sequencer(sequencer: SceneSequencer) -> Self {
        Self {
            sequencer,
            finished: false,
        }
    }

    /// Returns `true` once every slide has played.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

//=== GameState Implementation ============================================

impl GameState for IntroState {
    fn update(&mut self, context: &GlobalContext, dt: f32) {
        self.sequencer.update(dt);

        if self.sequencer.is_empty() && !self.finished {
            info!(target: "game", "Intro finished");
            self.finished = true;
            context.post(AppEvent::IntroFinished);
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        self.sequencer.draw(surface);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::events::EventQueue;
    use crate::core::render::recording::{DrawCall, RecordingSurface};
    use crate::core::render::Image;

    fn run_until_finished(intro: &mut IntroState, context: &GlobalContext) -> usize {
        for frame in 0..10_000 {
            if intro.is_finished() {
                return frame;
            }
            intro.update(context, 0.1);
        }
        panic!("Intro never finished");
    }

    #[test]
    fn intro_posts_finished_exactly_once() {
        let queue = EventQueue::new(8);
        let context = GlobalContext::new(queue.sender(), (800, 600));
        let assets = assets::load().unwrap();
        let mut intro = IntroState::new(&assets, (800, 600)).unwrap();

        run_until_finished(&mut intro, &context);
        for _ in 0..10 {
            intro.update(&context, 0.1);
        }

        assert_eq!(queue.drain_frame(), vec![AppEvent::IntroFinished]);
    }

    #[test]
    fn slides_take_fade_in_hold_and_fade_out() {
        let queue = EventQueue::new(8);
        let context = GlobalContext::new(queue.sender(), (800, 600));
        let mut sequencer = SceneSequencer::new();
        sequencer.add(Scene::new(Image::new(4, 4), TimedSlide::new(1.0)));
        let mut intro = IntroState::from_sequencer(sequencer);

        let frames = run_until_finished(&mut intro, &context);

        // ~1s fade in + 1s hold + ~1s fade out at 0.1s per frame
        assert!((28..=36).contains(&frames), "Took {} frames", frames);
    }

    #[test]
    fn finished_intro_draws_black() {
        let queue = EventQueue::new(8);
        let context = GlobalContext::new(queue.sender(), (800, 600));
        let mut intro = IntroState::from_sequencer(SceneSequencer::new().with_fallback(Color::BLACK));

        intro.update(&context, 0.1);
        let mut surface = RecordingSurface::new(800, 600);
        intro.draw(&mut surface);

        assert!(intro.is_finished());
        assert_eq!(surface.calls, vec![DrawCall::Fill(Color::BLACK)]);
    }

    #[test]
    fn missing_slide_texture_fails() {
        let result = IntroState::new(&AssetManager::new(), (800, 600));
        assert!(matches!(result, Err(AssetError::TextureNotFound(_))));
    }
}
