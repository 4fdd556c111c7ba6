//! Turn scheduler.

use crate::cards::CardCatalog;
use crate::core::{GameState, Side, SideMap};

use super::regrowth::run_regrowth;
use super::spread::run_spread;

/// End the active player's turn.
///
/// Runs that side's activation phase (spread for alien, regrowth for
/// native), hands the turn over, replenishes both players' environment,
/// ticks cooldowns, and settles the result once the turn limit passes.
/// Calling this on a finished game returns the state unchanged.
///
/// The turn counter advances only on the hand-off *into* the alien side;
/// a native hand-off keeps the same turn number. Environment replenishes
/// to `(turn - 1) + initial_environment` for both players on every
/// hand-off, with no carryover.
#[must_use]
pub fn progress_turn(catalog: &CardCatalog, state: &GameState) -> GameState {
    if state.game_over {
        return state.clone();
    }

    let mut next = state.clone();
    match next.active_side {
        Side::Alien => run_spread(catalog, &mut next),
        Side::Native => run_regrowth(&mut next),
    }

    let next_side = next.active_side.opponent();
    // A full turn elapses when the hand-off reaches the alien side again.
    let new_turn = if next_side == Side::Alien {
        next.turn + 1
    } else {
        next.turn
    };

    for (_, player) in next.players.iter_mut() {
        player.replenish(new_turn);
        player.tick_cooldowns();
    }

    if new_turn > next.maximum_turns {
        let native = next.field.count_owned_by(Side::Native);
        let alien = next.field.count_owned_by(Side::Alien);
        next.scores = SideMap::new(native, alien);
        next.winner = match native.cmp(&alien) {
            std::cmp::Ordering::Greater => Some(Side::Native),
            std::cmp::Ordering::Less => Some(Side::Alien),
            std::cmp::Ordering::Equal => None,
        };
        next.game_over = true;
    }

    next.turn = new_turn;
    next.active_side = next_side;
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::core::{AlienInstance, Cooldown, Facing, InstanceId, PlayerState};
    use crate::grid::{Cell, Coord, Field};

    fn catalog() -> CardCatalog {
        CardCatalog::builtin()
    }

    fn state() -> GameState {
        let players = SideMap::new(
            PlayerState::new(Side::Native, "N", Facing::Normal, 1),
            PlayerState::new(Side::Alien, "A", Facing::Mirrored, 2),
        );
        GameState::new(Field::all_native(7, 10), players, 8)
    }

    #[test]
    fn test_hand_off_alternates_sides() {
        let catalog = catalog();
        let s0 = state();
        assert_eq!(s0.active_side, Side::Alien);

        let s1 = progress_turn(&catalog, &s0);
        assert_eq!(s1.active_side, Side::Native);

        let s2 = progress_turn(&catalog, &s1);
        assert_eq!(s2.active_side, Side::Alien);
    }

    #[test]
    fn test_turn_increments_only_entering_alien_slot() {
        let catalog = catalog();
        let s0 = state();
        assert_eq!(s0.turn, 1);

        // Alien ends; native's half of turn 1 begins.
        let s1 = progress_turn(&catalog, &s0);
        assert_eq!(s1.turn, 1);

        // Native ends; turn 2 begins with the alien side.
        let s2 = progress_turn(&catalog, &s1);
        assert_eq!(s2.turn, 2);
    }

    #[test]
    fn test_environment_replenishes_to_formula() {
        let catalog = catalog();
        let mut s = state();
        s.players[Side::Alien].current_environment = 0;

        // Two hand-offs reach turn 2.
        let s = progress_turn(&catalog, &s);
        let s = progress_turn(&catalog, &s);

        assert_eq!(s.turn, 2);
        for (side, initial) in [(Side::Native, 1), (Side::Alien, 2)] {
            let player = &s.players[side];
            assert_eq!(player.max_environment, (2 - 1) + initial);
            assert_eq!(player.current_environment, player.max_environment);
        }
    }

    #[test]
    fn test_cooldowns_tick_on_every_hand_off() {
        let catalog = catalog();
        let mut s = state();
        s.players[Side::Native].cooldowns.push_back(Cooldown {
            card: CardId::new(11),
            turns_remaining: 2,
        });

        let s = progress_turn(&catalog, &s);
        assert_eq!(s.players[Side::Native].cooldowns[0].turns_remaining, 1);

        let s = progress_turn(&catalog, &s);
        assert!(s.players[Side::Native].cooldowns.is_empty());
    }

    #[test]
    fn test_game_over_and_winner() {
        let catalog = catalog();
        let mut s = state();
        s.turn = 8;
        s.active_side = Side::Native; // next hand-off enters turn 9

        // Give the alien side a bit of ground so the score is split.
        let id = InstanceId(0);
        s.instances.insert(
            id,
            AlienInstance::new(
                id,
                CardId::new(1),
                crate::cards::Shape::Single,
                1,
                Coord::new(0, 0),
                1,
            ),
        );
        s.field.set(Cell::alien_core(Coord::new(0, 0), id));
        s.field.set(Cell::invasion(Coord::new(1, 0), id));

        let done = progress_turn(&catalog, &s);

        assert!(done.game_over);
        assert_eq!(done.scores[Side::Alien], 2);
        assert_eq!(done.scores[Side::Native], 68);
        assert_eq!(done.winner, Some(Side::Native));
    }

    #[test]
    fn test_tie_has_no_winner() {
        let catalog = catalog();
        let players = SideMap::new(
            PlayerState::new(Side::Native, "N", Facing::Normal, 1),
            PlayerState::new(Side::Alien, "A", Facing::Mirrored, 1),
        );
        let mut s = GameState::new(Field::all_native(2, 1), players, 1);
        s.turn = 1;
        s.active_side = Side::Native;

        // One square each.
        let id = InstanceId(0);
        s.instances.insert(
            id,
            AlienInstance::new(
                id,
                CardId::new(99),
                crate::cards::Shape::Single,
                1,
                Coord::new(0, 0),
                1,
            ),
        );
        s.field.set(Cell::alien_core(Coord::new(0, 0), id));

        let done = progress_turn(&catalog, &s);

        assert!(done.game_over);
        assert_eq!(done.scores[Side::Native], 1);
        assert_eq!(done.scores[Side::Alien], 1);
        assert_eq!(done.winner, None);
    }

    #[test]
    fn test_finished_game_is_a_no_op() {
        let catalog = catalog();
        let mut s = state();
        s.game_over = true;
        s.winner = Some(Side::Native);

        let after = progress_turn(&catalog, &s);

        assert_eq!(after, s);
    }

    #[test]
    fn test_native_hand_off_runs_regrowth() {
        let catalog = catalog();
        let mut s = state();
        s.active_side = Side::Native;
        s.field.set(Cell::empty(Coord::new(2, 2)));
        s.field.set(Cell::recovery_pending(Coord::new(4, 4), 1));

        let after = progress_turn(&catalog, &s);

        assert!(matches!(
            after.field.get(Coord::new(2, 2)),
            Some(Cell::RecoveryPending { .. })
        ));
        assert!(matches!(
            after.field.get(Coord::new(4, 4)),
            Some(Cell::Native { .. })
        ));
    }

    #[test]
    fn test_alien_hand_off_runs_spread() {
        let catalog = catalog();
        let mut s = state();
        let id = InstanceId(0);
        s.instances.insert(
            id,
            AlienInstance::new(
                id,
                CardId::new(1),
                crate::cards::Shape::Cross,
                1,
                Coord::new(3, 5),
                1,
            ),
        );
        s.field.set(Cell::alien_core(Coord::new(3, 5), id));

        let after = progress_turn(&catalog, &s);

        assert_eq!(
            after.field.get(Coord::new(3, 6)),
            Some(&Cell::invasion(Coord::new(3, 6), id))
        );
    }
}
