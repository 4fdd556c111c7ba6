//! Growth engine: multi-stage alien evolution.

use crate::cards::{CardDefinition, GrowthCondition};
use crate::core::AlienInstance;

/// Advance `alien` by at most one growth stage.
///
/// No-op when the card has no stage at the alien's current index. Stages
/// advance strictly one per invocation; a stage whose threshold was passed
/// long ago still fires alone, and the next stage waits for the next
/// invocation. Meeting a stage resets the idle counter.
pub fn apply_growth(alien: &mut AlienInstance, card: &CardDefinition) {
    let Some(stage) = card.growth().get(alien.growth_stage) else {
        return;
    };

    let met = match stage.condition {
        GrowthCondition::TurnsSinceLastAction { turns } => {
            alien.turns_since_last_action >= turns
        }
    };
    if !met {
        return;
    }

    if let Some(power) = stage.effect.power {
        alien.power = power;
    }
    if let Some(shape) = stage.effect.shape {
        alien.shape = shape;
    }
    alien.growth_stage += 1;
    alien.turns_since_last_action = 0;
}
