//! Top-level game state.
//!
//! Every rules entry point consumes a `&GameState` and returns a brand-new
//! value; `im` collections make the clone cheap via structural sharing, so
//! observers can keep reading a prior snapshot while a new one is built.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use super::instance::{AlienInstance, InstanceId};
use super::player::PlayerState;
use super::side::{Side, SideMap};
use crate::grid::Field;

/// Turn phases surfaced to presentation layers.
///
/// The scheduler leaves a fresh hand-off in [`Phase::Summon`], the phase in
/// which the active player may act.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Environment replenishment.
    Environment,
    /// The active player plays cards and moves aliens.
    Summon,
    /// Automatic end-of-turn processing (spread or regrowth).
    Activation,
}

/// Complete game state.
///
/// Plain, acyclic, serializable data: hosts that need save/restore can
/// snapshot it wholesale (see `core::snapshot`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current turn, starting at 1.
    pub turn: u32,

    /// Turn after which the game ends.
    pub maximum_turns: u32,

    /// The side whose turn it is.
    pub active_side: Side,

    /// Current phase, for presentation layers.
    pub phase: Phase,

    /// The playing field.
    pub field: Field,

    /// Both players.
    pub players: SideMap<PlayerState>,

    /// All living alien instances, by id.
    pub instances: OrdMap<InstanceId, AlienInstance>,

    /// Whether the game has ended.
    pub game_over: bool,

    /// The winning side once the game ends; `None` before then and on a tie.
    pub winner: Option<Side>,

    /// Final owned-square counts, filled in when the game ends.
    pub scores: SideMap<u32>,

    /// Next instance id to allocate.
    next_instance_id: u32,
}

impl GameState {
    /// Create a fresh state: turn 1, alien side to act, no instances.
    #[must_use]
    pub fn new(field: Field, players: SideMap<PlayerState>, maximum_turns: u32) -> Self {
        Self {
            turn: 1,
            maximum_turns,
            active_side: Side::Alien,
            phase: Phase::Summon,
            field,
            players,
            instances: OrdMap::new(),
            game_over: false,
            winner: None,
            scores: SideMap::with_value(0),
            next_instance_id: 0,
        }
    }

    /// Allocate the next instance id.
    pub(crate) fn alloc_instance(&mut self) -> InstanceId {
        let id = InstanceId(self.next_instance_id);
        self.next_instance_id += 1;
        id
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> &PlayerState {
        &self.players[self.active_side]
    }

    /// An instance by id.
    #[must_use]
    pub fn instance(&self, id: InstanceId) -> Option<&AlienInstance> {
        self.instances.get(&id)
    }
}
