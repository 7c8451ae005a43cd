//! Input handling: the placement state machine driven by pointer events.

mod state;

pub use state::PlacementState;
