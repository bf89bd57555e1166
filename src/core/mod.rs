//=========================================================================
// Core Systems
//=========================================================================
//
// Platform-independent building blocks of the game.
//
// Modules:
// - assets:  Named textures and sprite sheets
// - events:  Application events and the per-frame event queue
// - globals: Context shared with game states during updates
// - input:   Input events and per-frame input state
// - render:  Colors, images, and the drawing surface
// - scene:   Fading scenes and the scene sequencer
// - state:   Game states and the state manager
// - timing:  Frame pacing
//
//=========================================================================

pub mod assets;
pub mod events;
pub mod globals;
pub mod input;
pub mod render;
pub mod scene;
pub mod state;
pub mod timing;
