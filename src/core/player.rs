//! Per-player state.
//!
//! Environment is the per-turn resource currency. It replenishes fully at
//! every turn hand-off to `(turn - 1) + initial_environment`, so the
//! `initial_environment` baseline doubles as the handicap knob.

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};

use super::side::{Facing, Side};
use crate::cards::{CardDefinition, CardId};

/// A card temporarily locked out after being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cooldown {
    /// The locked-out card.
    pub card: CardId,
    /// Turns until the card unlocks.
    pub turns_remaining: u32,
}

/// One player's state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Which side this player controls.
    pub side: Side,

    /// Display name.
    pub name: String,

    /// Vertical mirroring applied to this player's directional targeting.
    pub facing: Facing,

    /// Resource baseline; doubles as the handicap knob.
    pub initial_environment: u32,

    /// Resource currently available to spend.
    pub current_environment: u32,

    /// Resource ceiling this turn.
    pub max_environment: u32,

    /// Cards this player may play, one entry per copy.
    pub library: Vector<CardId>,

    /// Cards currently on cooldown.
    pub cooldowns: Vector<Cooldown>,

    /// Plays recorded for limited-use cards.
    pub used_counts: OrdMap<CardId, u32>,
}

impl PlayerState {
    /// Create a player at their handicap baseline.
    #[must_use]
    pub fn new(side: Side, name: impl Into<String>, facing: Facing, initial_environment: u32) -> Self {
        Self {
            side,
            name: name.into(),
            facing,
            initial_environment,
            current_environment: initial_environment,
            max_environment: initial_environment,
            library: Vector::new(),
            cooldowns: Vector::new(),
            used_counts: OrdMap::new(),
        }
    }

    /// Whether the presentation layer should offer this card.
    ///
    /// The rules engine records cooldowns and usage counts but does not
    /// reject plays for them; enforcement sits with the caller.
    #[must_use]
    pub fn is_card_available(&self, card: &CardDefinition) -> bool {
        if self.cooldowns.iter().any(|c| c.card == card.id) {
            return false;
        }
        match card.usage_limit {
            Some(limit) => self.used_counts.get(&card.id).copied().unwrap_or(0) < limit,
            None => true,
        }
    }

    /// Record a play: start a cooldown and bump the usage count where the
    /// card calls for them.
    pub(crate) fn note_played(&mut self, card: &CardDefinition) {
        if let Some(turns) = card.cooldown_turns {
            self.cooldowns.push_back(Cooldown {
                card: card.id,
                turns_remaining: turns,
            });
        }
        if card.usage_limit.is_some() {
            let used = self.used_counts.get(&card.id).copied().unwrap_or(0);
            self.used_counts.insert(card.id, used + 1);
        }
    }

    /// Refill environment for the given turn: full replenishment, no
    /// carryover.
    pub(crate) fn replenish(&mut self, turn: u32) {
        let max = (turn - 1) + self.initial_environment;
        self.max_environment = max;
        self.current_environment = max;
    }

    /// Advance cooldowns by one step, dropping entries that reach zero.
    pub(crate) fn tick_cooldowns(&mut self) {
        self.cooldowns = self
            .cooldowns
            .iter()
            .filter(|c| c.turns_remaining > 1)
            .map(|c| Cooldown {
                card: c.card,
                turns_remaining: c.turns_remaining - 1,
            })
            .collect();
    }
}
