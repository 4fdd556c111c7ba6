//! The rules engine: validation, application, and the per-turn phases.
//!
//! Three entry points, each a pure function from `(state, args)` to a new
//! state: [`play_card`], [`move_alien`], and [`progress_turn`]. Nothing
//! here mutates a caller's snapshot.

pub mod actions;
pub mod growth;
pub mod regrowth;
pub mod spread;
pub mod turn;

pub use actions::{move_alien, play_card};
pub use growth::apply_growth;
pub use turn::progress_turn;
