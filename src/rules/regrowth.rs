//! Regrowth engine: the native activation phase.

use crate::core::GameState;
use crate::grid::{Cell, Coord};

/// Two-stage recovery sweep over the whole field.
///
/// Pending squares regrow first; only then do empty squares enter the
/// pending state. The pass order matters: a square must never advance two
/// stages within one phase.
pub(crate) fn run_regrowth(state: &mut GameState) {
    let pending: Vec<Coord> = state
        .field
        .iter()
        .filter(|c| matches!(c, Cell::RecoveryPending { .. }))
        .map(Cell::coord)
        .collect();
    for at in pending {
        state.field.set(Cell::native(at));
    }

    let turn = state.turn;
    let empty: Vec<Coord> = state
        .field
        .iter()
        .filter(|c| matches!(c, Cell::Empty { .. }))
        .map(Cell::coord)
        .collect();
    for at in empty {
        state.field.set(Cell::recovery_pending(at, turn));
    }
}
