//=========================================================================
// Scene Sequencer
//=========================================================================
//
// Plays scenes one at a time in insertion (FIFO) order. Only the head
// scene is updated and drawn; once it reports `Done` it is evicted and
// the next scene takes over on the following update.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::VecDeque;

use log::debug;

//=== Internal Dependencies ===============================================

use super::{Scene, SceneState};
use crate::core::render::{Color, Surface};

//=== SceneSequencer ======================================================

/// FIFO queue of scenes with a single visible head.
pub struct SceneSequencer {
    scenes: VecDeque<Scene>,
    fallback: Color,
}

impl SceneSequencer {
    /// Color filled when no scenes remain.
    pub const DEFAULT_FALLBACK: Color = Color::FUCHSIA;

    pub fn new() -> Self {
        Self {
            scenes: VecDeque::new(),
            fallback: Self::DEFAULT_FALLBACK,
        }
    }

    /// Overrides the color drawn while the sequencer is empty.
    pub fn with_fallback(mut self, color: Color) -> Self {
        self.fallback = color;
        self
    }

    /// Queues `scene` behind every scene already added.
    pub fn add(&mut self, scene: Scene) {
        self.scenes.push_back(scene);
    }

    //--- Update & Draw ----------------------------------------------------

    /// Updates the head scene, or evicts it if it is done.
    ///
    /// The scene promoted by an eviction is not updated in the same call.
    pub fn update(&mut self, dt: f32) {
        let Some(head) = self.scenes.front_mut() else {
            return;
        };

        if head.state() == SceneState::Done {
            self.scenes.pop_front();
            debug!(target: "game::scene", "Scene finished, {} remaining", self.scenes.len());
        } else {
            head.update(dt);
        }
    }

    /// Draws the head scene, or fills `surface` with the fallback color.
    pub fn draw(&self, surface: &mut dyn Surface) {
        match self.scenes.front() {
            Some(head) => head.draw(surface),
            None => surface.fill(self.fallback),
        }
    }

    //--- Queries ----------------------------------------------------------

    /// The scene currently shown, if any.
    pub fn current(&self) -> Option<&Scene> {
        self.scenes.front()
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

impl Default for SceneSequencer {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
