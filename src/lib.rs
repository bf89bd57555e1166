//=========================================================================
// Blackjack - Library Root
//
// This crate defines the game shell of a Blackjack card game: a keyed
// state manager, fading scenes played in sequence, menus, and the
// event-driven wiring between them.
//
// Responsibilities:
// - Expose the game facade (`GameBuilder`, `Game`)
// - Expose the reusable core systems (states, scenes, events, input)
// - Keep OS integration (`platform`) hidden from users
//
// Typical usage:
// ```no_run
// use blackjack::GameBuilder;
//
// fn main() -> Result<(), blackjack::GameError> {
//     GameBuilder::new().build()?.run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the platform-independent systems (state manager,
// scenes, events, input state, rendering primitives, assets).
//
// `ui` and `states` contain the game's menus and screens built on them.
//
pub mod assets;
pub mod core;
pub mod prelude;
pub mod states;
pub mod ui;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the window, Winit event loop and pixels
// presentation, and is not part of the public API surface.
//
// `game` wires states and events together and drives frames.
//
mod game;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use game::{DisplayRequest, Game, GameBuilder, GameConfig, GameError};
pub use platform::PlatformError;
