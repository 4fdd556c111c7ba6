//! Action validation and application.
//!
//! The two player-action entry points. Validation runs to completion
//! before the new state is constructed, so a rejected action returns an
//! error with the caller's snapshot untouched.

use crate::cards::{
    CardCatalog, CardDefinition, CardKind, ClearedState, RecoveredState, Targeting,
};
use crate::core::{AlienInstance, GameState, InstanceId};
use crate::effects::effect_range;
use crate::error::RuleViolation;
use crate::grid::{Cell, Coord};

/// Play `card` for the active player, anchored at `target`.
///
/// # Errors
///
/// Rejects plays the rules forbid: unaffordable cost, a target off the
/// board, or a target cell type the card family disallows.
pub fn play_card(
    state: &GameState,
    card: &CardDefinition,
    target: Coord,
) -> Result<GameState, RuleViolation> {
    let Some(target_cell) = state.field.get(target).copied() else {
        return Err(RuleViolation::OutOfBounds(target));
    };

    let player = state.active_player();
    if player.current_environment < card.cost {
        return Err(RuleViolation::InsufficientEnvironment {
            needed: card.cost,
            available: player.current_environment,
        });
    }

    match &card.kind {
        CardKind::Alien { .. } => {
            // Aliens take root only on living ground: native or invasion.
            if matches!(
                target_cell,
                Cell::Empty { .. } | Cell::RecoveryPending { .. } | Cell::AlienCore { .. }
            ) {
                return Err(RuleViolation::IllegalAlienTarget { at: target });
            }
        }
        CardKind::Recovery { targeting, .. } => {
            let species = matches!(targeting, Targeting::Species);
            if !species
                && !matches!(
                    target_cell,
                    Cell::Empty { .. } | Cell::RecoveryPending { .. }
                )
            {
                return Err(RuleViolation::IllegalRecoveryTarget { at: target });
            }
        }
        CardKind::Eradication { .. } => {
            if matches!(target_cell, Cell::Native { .. }) {
                return Err(RuleViolation::IllegalEradicationTarget { at: target });
            }
        }
    }

    let mut next = state.clone();
    let facing = next.active_player().facing;
    let range = effect_range(card, target, &next.field, facing);

    match &card.kind {
        CardKind::Alien { targeting, .. } => {
            if let Targeting::Shaped { shape, power, .. } = *targeting {
                let id = next.alloc_instance();
                let alien = AlienInstance::new(id, card.id, shape, power, target, next.turn);
                next.instances.insert(id, alien);
                next.field.set(Cell::alien_core(target, id));
            }
        }
        CardKind::Eradication { post_removal, .. } => {
            for at in range {
                if let Some(Cell::AlienCore { instance, .. }) = next.field.get(at).copied() {
                    next.instances.remove(&instance);
                }
                let cleared = match post_removal {
                    ClearedState::Empty => Cell::empty(at),
                    ClearedState::RecoveryPending => Cell::recovery_pending(at, next.turn),
                };
                next.field.set(cleared);
            }
        }
        CardKind::Recovery {
            targeting,
            post_recovery,
        } => {
            let species = matches!(targeting, Targeting::Species);
            for at in range {
                let eligible = species
                    || matches!(
                        next.field.get(at),
                        Some(Cell::Empty { .. } | Cell::RecoveryPending { .. })
                    );
                if !eligible {
                    continue;
                }
                let recovered = match post_recovery {
                    RecoveredState::Native => Cell::native(at),
                    RecoveredState::RecoveryPending => Cell::recovery_pending(at, next.turn),
                };
                next.field.set(recovered);
            }
        }
    }

    let side = next.active_side;
    next.players[side].current_environment -= card.cost;
    next.players[side].note_played(card);

    Ok(next)
}

/// Move an alien instance onto a square it dominates.
///
/// Moving costs the same environment as playing the originating card, and
/// resets the instance's idle counter.
///
/// # Errors
///
/// Rejects moves for unknown instances, unaffordable cost, or a target
/// that is not an invasion square dominated by this very instance.
pub fn move_alien(
    catalog: &CardCatalog,
    state: &GameState,
    instance: InstanceId,
    target: Coord,
) -> Result<GameState, RuleViolation> {
    let Some(alien) = state.instance(instance) else {
        return Err(RuleViolation::UnknownInstance(instance));
    };
    let Some(card) = catalog.get(alien.card) else {
        return Err(RuleViolation::UnknownCard(alien.card));
    };

    let player = state.active_player();
    if player.current_environment < card.cost {
        return Err(RuleViolation::InsufficientEnvironment {
            needed: card.cost,
            available: player.current_environment,
        });
    }

    match state.field.get(target) {
        Some(Cell::Invasion { dominant, .. }) if *dominant == instance => {}
        Some(_) => return Err(RuleViolation::IllegalMoveTarget { instance, at: target }),
        None => return Err(RuleViolation::OutOfBounds(target)),
    }

    let mut next = state.clone();
    if let Some(mut moved) = next.instances.get(&instance).copied() {
        next.field.set(Cell::empty(moved.at));
        next.field.set(Cell::alien_core(target, instance));
        moved.at = target;
        moved.turns_since_last_action = 0;
        next.instances.insert(instance, moved);
    }
    let side = next.active_side;
    next.players[side].current_environment -= card.cost;

    Ok(next)
}
