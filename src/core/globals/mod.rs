//=========================================================================
// Global State
//=========================================================================
//
// Data shared with every game state during a frame.
//
//=========================================================================

//=== Module Declarations =================================================

mod global_context;

//=== Public API ==========================================================

pub use global_context::GlobalContext;
