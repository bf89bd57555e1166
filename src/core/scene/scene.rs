//=========================================================================
// Scene
//=========================================================================
//
// One image with a fade-in / active / fade-out lifecycle.
//
// The fade counter runs from 0 up to the transition length while fading
// in and back down to 0 while fading out; opacity is derived from it at
// draw time, giving a linear cross-fade.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::{SceneBehavior, SceneState};
use crate::core::render::{Image, Rect, Surface};

//=== SceneTimeline =======================================================

/// Lifecycle state and fade counter of a scene.
///
/// Behaviors receive `&mut SceneTimeline` to request transitions.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneTimeline {
    state: SceneState,
    counter: f32,
    length: f32,
}

impl SceneTimeline {
    /// Creates a timeline in [`SceneState::NotStarted`].
    ///
    /// # Panics
    ///
    /// Panics if `length <= 0.0`.
    pub fn new(length: f32) -> Self {
        assert!(length > 0.0, "Transition length must be positive, got {}", length);
        Self {
            state: SceneState::NotStarted,
            counter: 0.0,
            length,
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn state(&self) -> SceneState {
        self.state
    }

    /// Fade counter in seconds, within `[0, length]`.
    pub fn counter(&self) -> f32 {
        self.counter
    }

    /// Fade duration in seconds.
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Opacity in `[0, 1]`.
    pub fn opacity(&self) -> f32 {
        (self.counter / self.length).clamp(0.0, 1.0)
    }

    /// Opacity scaled to `0..=255`.
    pub fn alpha(&self) -> u8 {
        (self.opacity() * 255.0).round() as u8
    }

    //--- Transition Requests ----------------------------------------------

    /// Starts fading out. Valid while fading in, active or paused.
    pub fn fade_out(&mut self) {
        match self.state {
            SceneState::FadeIn | SceneState::Active | SceneState::Paused => {
                self.set_state(SceneState::FadeOut)
            }
            state => warn!(target: "game::scene", "Ignoring fade-out request while {:?}", state),
        }
    }

    /// Pauses an active scene.
    pub fn pause(&mut self) {
        match self.state {
            SceneState::Active => self.set_state(SceneState::Paused),
            state => warn!(target: "game::scene", "Ignoring pause request while {:?}", state),
        }
    }

    /// Resumes a paused scene.
    pub fn resume(&mut self) {
        match self.state {
            SceneState::Paused => self.set_state(SceneState::Active),
            state => warn!(target: "game::scene", "Ignoring resume request while {:?}", state),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn set_state(&mut self, state: SceneState) {
        debug!(target: "game::scene", "Scene {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    #[cfg(test)]
    pub(crate) fn force_state(&mut self, state: SceneState) {
        self.state = state;
    }
}

//=== Scene ===============================================================

/// A displayable image with a fade lifecycle and attached behavior.
pub struct Scene {
    image: Image,
    rect: Rect,
    timeline: SceneTimeline,
    behavior: Box<dyn SceneBehavior>,
}

impl Scene {
    /// Default fade duration in seconds.
    pub const DEFAULT_TRANSITION_LENGTH: f32 = 1.0;

    //--- Construction -----------------------------------------------------

    /// Creates a scene drawn at the origin at the image's own size.
    pub fn new<B>(image: Image, behavior: B) -> Self
    where
        B: SceneBehavior + 'static,
    {
        let rect = image.rect();
        Self {
            image,
            rect,
            timeline: SceneTimeline::new(Self::DEFAULT_TRANSITION_LENGTH),
            behavior: Box::new(behavior),
        }
    }

    /// Moves the scene's top-left corner to `(x, y)`.
    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.rect = self.rect.at(x, y);
        self
    }

    /// Centers the scene on a screen of the given size.
    pub fn centered_in(self, (width, height): (u32, u32)) -> Self {
        let x = (width as i32 - self.rect.width as i32) / 2;
        let y = (height as i32 - self.rect.height as i32) / 2;
        self.with_position(x, y)
    }

    /// Sets the fade duration.
    ///
    /// # Panics
    ///
    /// Panics if `length <= 0.0`.
    pub fn with_transition_length(mut self, length: f32) -> Self {
        self.timeline = SceneTimeline::new(length);
        self
    }

    //--- Accessors --------------------------------------------------------

    pub fn state(&self) -> SceneState {
        self.timeline.state()
    }

    pub fn timeline(&self) -> &SceneTimeline {
        &self.timeline
    }

    /// Transition requests from outside the behavior (e.g. a pause key).
    pub fn timeline_mut(&mut self) -> &mut SceneTimeline {
        &mut self.timeline
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    //--- Update & Draw ----------------------------------------------------

    /// Advances the lifecycle by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let timeline = &mut self.timeline;

        match timeline.state {
            SceneState::NotStarted => {
                timeline.counter = 0.0;
                timeline.set_state(SceneState::FadeIn);
            }

            SceneState::FadeIn => {
                timeline.counter = (timeline.counter + dt).min(timeline.length);
                if timeline.counter >= timeline.length {
                    timeline.set_state(SceneState::Active);
                }
            }

            SceneState::Active => self.behavior.on_update(timeline, dt),

            SceneState::Paused => {
                if self.behavior.handles_pause() {
                    self.behavior.on_pause_update(timeline, dt);
                } else {
                    timeline.set_state(SceneState::Active);
                }
            }

            SceneState::FadeOut => {
                timeline.counter = (timeline.counter - dt).max(0.0);
                if timeline.counter <= 0.0 {
                    timeline.set_state(SceneState::Done);
                }
            }

            SceneState::Done => {}
        }
    }

    /// Blits the image at the scene's rect with the current opacity.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.blit(&self.image, self.rect, self.timeline.alpha());
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::Color;

    //--- Test Helpers -----------------------------------------------------

    /// Fades out after a fixed number of active frames.
    struct FramesThenFade(u32);

    impl SceneBehavior for FramesThenFade {
        fn on_update(&mut self, timeline: &mut SceneTimeline, _dt: f32) {
            if self.0 == 0 {
                timeline.fade_out();
            } else {
                self.0 -= 1;
            }
        }
    }

    /// Counts paused frames and resumes after the given number.
    struct ResumeAfter(u32);

    impl SceneBehavior for ResumeAfter {
        fn on_update(&mut self, _timeline: &mut SceneTimeline, _dt: f32) {}

        fn handles_pause(&self) -> bool {
            true
        }

        fn on_pause_update(&mut self, timeline: &mut SceneTimeline, _dt: f32) {
            if self.0 == 0 {
                timeline.resume();
            } else {
                self.0 -= 1;
            }
        }
    }

    fn scene<B: SceneBehavior + 'static>(behavior: B) -> Scene {
        Scene::new(Image::solid(4, 4, Color::WHITE), behavior)
    }

    fn run_until_active(scene: &mut Scene, dt: f32) {
        for _ in 0..1000 {
            if scene.state() == SceneState::Active {
                return;
            }
            scene.update(dt);
        }
        panic!("Scene never became active");
    }

    //=====================================================================
    // Lifecycle
    //=====================================================================

    #[test]
    fn first_update_starts_fade_in_without_consuming_time() {
        let mut scene = scene(FramesThenFade(10));
        assert_eq!(scene.state(), SceneState::NotStarted);

        scene.update(0.5);

        assert_eq!(scene.state(), SceneState::FadeIn);
        assert_eq!(scene.timeline().counter(), 0.0);
        assert_eq!(scene.timeline().alpha(), 0);
    }

    #[test]
    fn fade_in_reaches_active_at_transition_length() {
        let mut scene = scene(FramesThenFade(10));
        scene.update(0.0);

        scene.update(0.6);
        assert_eq!(scene.state(), SceneState::FadeIn);

        scene.update(0.6);
        assert_eq!(scene.state(), SceneState::Active);
        assert_eq!(scene.timeline().counter(), 1.0, "Counter is clamped to the length");
        assert_eq!(scene.timeline().alpha(), 255);
    }

    #[test]
    fn opacity_rises_then_falls_monotonically() {
        let mut scene = scene(FramesThenFade(2));
        let mut fade_in = Vec::new();
        let mut fade_out = Vec::new();

        for _ in 0..200 {
            match scene.state() {
                SceneState::FadeIn => fade_in.push(scene.timeline().opacity()),
                SceneState::FadeOut => fade_out.push(scene.timeline().opacity()),
                SceneState::Done => break,
                _ => {}
            }
            scene.update(0.1);
        }

        assert_eq!(scene.state(), SceneState::Done);
        assert_eq!(fade_in.first(), Some(&0.0), "Fade-in starts invisible");
        assert!(fade_in.windows(2).all(|w| w[0] <= w[1]), "Fade-in never dims");
        assert_eq!(fade_out.first(), Some(&1.0), "Fade-out starts fully visible");
        assert!(fade_out.windows(2).all(|w| w[0] >= w[1]), "Fade-out never brightens");
        assert_eq!(scene.timeline().opacity(), 0.0);
    }

    #[test]
    fn fade_out_from_fade_in_keeps_partial_counter() {
        let mut scene = scene(FramesThenFade(10));
        scene.update(0.0);
        scene.update(0.4);

        scene.timeline_mut().fade_out();
        scene.update(0.3);

        assert_eq!(scene.state(), SceneState::FadeOut);
        assert!((scene.timeline().counter() - 0.1).abs() < 1e-6);

        scene.update(0.3);
        assert_eq!(scene.state(), SceneState::Done);
        assert_eq!(scene.timeline().counter(), 0.0, "Counter never drops below zero");
    }

    #[test]
    fn done_is_terminal() {
        let mut scene = scene(FramesThenFade(0));
        for _ in 0..100 {
            scene.update(0.25);
        }
        assert_eq!(scene.state(), SceneState::Done);

        scene.timeline_mut().fade_out();
        scene.update(1.0);
        assert_eq!(scene.state(), SceneState::Done);
    }

    //=====================================================================
    // Pausing
    //=====================================================================

    #[test]
    fn pause_without_handler_reverts_to_active() {
        let mut scene = scene(FramesThenFade(100));
        run_until_active(&mut scene, 0.5);

        scene.timeline_mut().pause();
        assert_eq!(scene.state(), SceneState::Paused);

        scene.update(0.1);
        assert_eq!(scene.state(), SceneState::Active);
    }

    #[test]
    fn pause_handler_runs_while_paused() {
        let mut scene = scene(ResumeAfter(2));
        run_until_active(&mut scene, 0.5);
        scene.timeline_mut().pause();

        scene.update(0.1);
        scene.update(0.1);
        assert_eq!(scene.state(), SceneState::Paused);

        scene.update(0.1);
        assert_eq!(scene.state(), SceneState::Active);
    }

    #[test]
    fn pause_is_ignored_outside_active() {
        let mut scene = scene(FramesThenFade(10));
        scene.timeline_mut().pause();
        assert_eq!(scene.state(), SceneState::NotStarted);

        scene.timeline_mut().resume();
        assert_eq!(scene.state(), SceneState::NotStarted);
    }

    #[test]
    fn fade_out_is_ignored_before_start() {
        let mut scene = scene(FramesThenFade(10));
        scene.timeline_mut().fade_out();
        assert_eq!(scene.state(), SceneState::NotStarted);
    }

    //=====================================================================
    // Construction
    //=====================================================================

    #[test]
    fn centered_in_positions_rect() {
        let scene = scene(FramesThenFade(0)).centered_in((10, 20));
        assert_eq!(scene.rect(), Rect::new(3, 8, 4, 4));
    }

    #[test]
    fn custom_transition_length_scales_opacity() {
        let mut scene = scene(FramesThenFade(0)).with_transition_length(2.0);
        scene.update(0.0);
        scene.update(1.0);
        assert_eq!(scene.timeline().opacity(), 0.5);
    }

    #[test]
    #[should_panic(expected = "Transition length must be positive")]
    fn zero_transition_length_panics() {
        SceneTimeline::new(0.0);
    }
}
