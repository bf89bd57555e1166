//=========================================================================
// Scene System
//=========================================================================
//
// Single-image scenes with fade transitions, played back one at a time.
//
// Architecture:
//   SceneSequencer
//     └─ scenes: VecDeque<Scene>      (FIFO, only the head is live)
//          ├─ image + rect
//          ├─ timeline: SceneTimeline (lifecycle state + fade counter)
//          └─ behavior: Box<dyn SceneBehavior>
//
// Lifecycle:
//   NotStarted → FadeIn → Active ⇄ Paused
//   FadeIn / Active / Paused → FadeOut → Done
//
//=========================================================================

//=== Module Declarations =================================================

mod scene;
mod sequencer;

//=== Public API ==========================================================

pub use scene::{Scene, SceneTimeline};
pub use sequencer::SceneSequencer;

//=== SceneState ==========================================================

/// Lifecycle state of a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneState {
    /// Not updated yet; the first update initialises the fade.
    NotStarted,

    /// Opacity rising towards full.
    FadeIn,

    /// Fully visible; the behavior runs every frame.
    Active,

    /// Fully visible; the behavior's pause hook runs instead.
    Paused,

    /// Opacity falling towards zero.
    FadeOut,

    /// Finished. Terminal.
    Done,
}

//=== SceneBehavior Trait =================================================

/// Per-scene logic driven while the scene is visible.
///
/// Behaviors steer the scene through the [`SceneTimeline`] they receive,
/// typically by calling [`SceneTimeline::fade_out`] once they are done.
///
/// # Minimal Implementation
///
/// Only `on_update()` is required:
///
/// ```rust
/// # use blackjack::core::scene::{SceneBehavior, SceneTimeline};
/// struct FadeOutImmediately;
///
/// impl SceneBehavior for FadeOutImmediately {
///     fn on_update(&mut self, timeline: &mut SceneTimeline, _dt: f32) {
///         timeline.fade_out();
///     }
/// }
/// ```
pub trait SceneBehavior {
    /// Called every frame while the scene is [`SceneState::Active`].
    fn on_update(&mut self, timeline: &mut SceneTimeline, dt: f32);

    /// Whether this behavior implements [`on_pause_update`](Self::on_pause_update).
    ///
    /// Scenes whose behavior does not handle pausing drop straight back to
    /// [`SceneState::Active`] when paused.
    fn handles_pause(&self) -> bool {
        false
    }

    /// Called every frame while the scene is [`SceneState::Paused`].
    fn on_pause_update(&mut self, _timeline: &mut SceneTimeline, _dt: f32) {}
}

//=== TimedSlide ==========================================================

/// Holds the scene fully visible for a fixed time, then fades it out.
///
/// The hold timer is armed on the first active frame (without consuming
/// that frame's time) and disarmed again when the fade-out is requested.
#[derive(Debug, Clone)]
pub struct TimedSlide {
    hold: f32,
    remaining: Option<f32>,
}

impl TimedSlide {
    /// Default hold time in seconds.
    pub const DEFAULT_HOLD: f32 = 3.0;

    pub fn new(hold: f32) -> Self {
        Self { hold, remaining: None }
    }

    /// Seconds left before fading out, if armed.
    pub fn remaining(&self) -> Option<f32> {
        self.remaining
    }
}

impl Default for TimedSlide {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HOLD)
    }
}

impl SceneBehavior for TimedSlide {
    fn on_update(&mut self, timeline: &mut SceneTimeline, dt: f32) {
        match self.remaining {
            None => self.remaining = Some(self.hold),
            Some(remaining) => {
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    timeline.fade_out();
                    self.remaining = None;
                } else {
                    self.remaining = Some(remaining);
                }
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn active_timeline() -> SceneTimeline {
        let mut timeline = SceneTimeline::new(1.0);
        timeline.force_state(SceneState::Active);
        timeline
    }

    #[test]
    fn timed_slide_arms_on_first_frame() {
        let mut slide = TimedSlide::new(3.0);
        let mut timeline = active_timeline();

        slide.on_update(&mut timeline, 0.5);

        assert_eq!(slide.remaining(), Some(3.0), "First frame only arms the timer");
        assert_eq!(timeline.state(), SceneState::Active);
    }

    #[test]
    fn timed_slide_fades_out_after_hold() {
        let mut slide = TimedSlide::new(1.0);
        let mut timeline = active_timeline();

        slide.on_update(&mut timeline, 0.25);
        slide.on_update(&mut timeline, 0.5);
        assert_eq!(timeline.state(), SceneState::Active);

        slide.on_update(&mut timeline, 0.5);
        assert_eq!(timeline.state(), SceneState::FadeOut);
        assert_eq!(slide.remaining(), None, "Timer disarms on fade-out");
    }

    #[test]
    fn default_behavior_does_not_handle_pause() {
        assert!(!TimedSlide::default().handles_pause());
    }
}
