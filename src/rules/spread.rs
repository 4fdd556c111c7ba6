//! Spread engine: the alien activation phase.
//!
//! Each turn-end on the alien side, every instance grows if it can, then
//! projects its invasion footprint and claims squares it outranks the
//! current dominant for. Instances left without a single dominated square
//! are removed.

use rustc_hash::FxHashMap;

use crate::cards::{CardCatalog, CardKind, Shape, Targeting};
use crate::core::{AlienInstance, Facing, GameState, InstanceId};
use crate::effects::targeting_range;
use crate::grid::{Cell, Field};

use super::growth::apply_growth;

/// Cost-then-recency priority key: more expensive cards dominate, ties go
/// to the more recently spawned instance. Instances whose card is missing
/// from the catalog rank as cost zero.
fn priority(catalog: &CardCatalog, alien: &AlienInstance) -> (u32, u32) {
    let cost = catalog.get(alien.card).map_or(0, |c| c.cost);
    (cost, alien.spawned_turn)
}

fn outranks(catalog: &CardCatalog, challenger: &AlienInstance, incumbent: &AlienInstance) -> bool {
    priority(catalog, challenger) > priority(catalog, incumbent)
}

/// Dominated-square counts (cores + invasions) per referenced instance id.
fn dominance_counts(field: &Field) -> FxHashMap<InstanceId, u32> {
    let mut counts = FxHashMap::default();
    for cell in field.iter() {
        if let Some(id) = cell.dominant_instance() {
            *counts.entry(id).or_insert(0) += 1;
        }
    }
    counts
}

/// Run the alien activation phase in place on a working state.
///
/// Spread ranges are projected with [`Facing::Normal`] for either player:
/// aliens spread in a fixed board orientation.
pub(crate) fn run_spread(catalog: &CardCatalog, state: &mut GameState) {
    // Idle counters tick before growth is evaluated.
    let ids: Vec<InstanceId> = state.instances.keys().copied().collect();
    for id in &ids {
        if let Some(alien) = state.instances.get_mut(id) {
            alien.turns_since_last_action += 1;
        }
    }

    // Priority order: cost descending, then spawn turn descending. The sort
    // is stable, so same-turn ties fall back to allocation order.
    let mut order: Vec<(InstanceId, (u32, u32))> = state
        .instances
        .iter()
        .map(|(id, alien)| (*id, priority(catalog, alien)))
        .collect();
    order.sort_by(|a, b| b.1.cmp(&a.1));

    for (id, _) in order {
        // An instance can drop out mid-pass; skip ids that are gone.
        let Some(mut alien) = state.instances.get(&id).copied() else {
            continue;
        };
        let Some(card) = catalog.get(alien.card) else {
            continue;
        };
        if !matches!(card.kind, CardKind::Alien { .. }) {
            continue;
        }

        apply_growth(&mut alien, card);
        state.instances.insert(id, alien);

        // Project the grown stats. A straight footprint inherits the card's
        // direction only when the card itself is straight; otherwise the
        // resolver falls back to vertical.
        let direction = match (alien.shape, card.targeting()) {
            (
                Shape::Straight,
                Targeting::Shaped {
                    shape: Shape::Straight,
                    direction,
                    ..
                },
            ) => direction,
            _ => None,
        };
        let targeting = Targeting::Shaped {
            shape: alien.shape,
            power: alien.power,
            direction,
        };

        let range = targeting_range(targeting, alien.at, &state.field, Facing::Normal);
        for at in range {
            let Some(cell) = state.field.get(at).copied() else {
                continue;
            };
            // Core squares are never overrun, not even by stronger aliens.
            if matches!(cell, Cell::AlienCore { .. }) {
                continue;
            }

            let incumbent = match cell {
                Cell::Invasion { dominant, .. } => state.instances.get(&dominant).copied(),
                _ => None,
            };
            let claim = match incumbent {
                None => true,
                Some(existing) => outranks(catalog, &alien, &existing),
            };
            if claim {
                state.field.set(Cell::invasion(at, id));
            }
        }
    }

    // Anything left without a single dominated square dies; its core square
    // reverts to bare ground if it is still that instance's core.
    let counts = dominance_counts(&state.field);
    let ids: Vec<InstanceId> = state.instances.keys().copied().collect();
    for id in ids {
        if counts.get(&id).copied().unwrap_or(0) > 0 {
            continue;
        }
        let Some(alien) = state.instances.remove(&id) else {
            continue;
        };
        tracing::debug!(%id, "alien instance lost all dominated cells, removing");
        if let Some(Cell::AlienCore { instance, .. }) = state.field.get(alien.at).copied() {
            if instance == id {
                state.field.set(Cell::empty(alien.at));
            }
        }
    }
}
