//! Core state model: sides, players, alien instances, and the top-level
//! [`GameState`].

pub mod instance;
pub mod player;
pub mod side;
pub mod snapshot;
pub mod state;

pub use instance::{AlienInstance, InstanceId};
pub use player::{Cooldown, PlayerState};
pub use side::{Facing, Side, SideMap};
pub use state::{GameState, Phase};
