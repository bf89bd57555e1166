//=========================================================================
// Frame Clock
//=========================================================================
//
// Frame pacing and delta time.
//
// Each tick sleeps for whatever is left of the frame budget implied by
// the requested cap, then reports the time since the previous tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

//=== FrameClock ==========================================================

/// Measures frame deltas and caps the frame rate by sleeping.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
    fps: f32,
}

impl FrameClock {
    /// Weight of the newest sample in the smoothed FPS.
    const FPS_SMOOTHING: f32 = 0.1;

    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            fps: 0.0,
        }
    }

    /// Waits out the rest of the frame budget and returns the delta in seconds.
    ///
    /// # Panics
    ///
    /// Panics if `max_fps == 0`.
    pub fn tick(&mut self, max_fps: u32) -> f32 {
        assert!(max_fps > 0, "Frame cap must be positive");

        let budget = Duration::from_secs_f64(1.0 / f64::from(max_fps));
        let elapsed = self.last.elapsed();
        if elapsed < budget {
            thread::sleep(budget - elapsed);
        }

        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;

        if dt > 0.0 {
            let sample = 1.0 / dt;
            self.fps = if self.fps == 0.0 {
                sample
            } else {
                self.fps + (sample - self.fps) * Self::FPS_SMOOTHING
            };
        }

        dt
    }

    /// Smoothed frames per second; zero before the first tick.
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_is_zero_before_first_tick() {
        assert_eq!(FrameClock::new().fps(), 0.0);
    }

    #[test]
    fn tick_waits_for_frame_budget() {
        let mut clock = FrameClock::new();

        let dt = clock.tick(50);

        assert!(dt >= 0.019, "A 50 FPS cap keeps frames at least 20ms apart, got {}", dt);
        assert!(clock.fps() > 0.0);
        assert!(clock.fps() <= 51.0, "Capped rate may not exceed the cap, got {}", clock.fps());
    }

    #[test]
    #[should_panic(expected = "Frame cap must be positive")]
    fn tick_panics_on_zero_cap() {
        FrameClock::new().tick(0);
    }
}
