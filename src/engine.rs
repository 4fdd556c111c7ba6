//! Engine façade: one owned state, three entry points.
//!
//! Presentation layers keep selection/hover/paging state of their own and
//! treat this object as the single authority on game data. Observers that
//! want to keep an old snapshot can clone [`Engine::state`] cheaply before
//! acting.

use crate::cards::{CardCatalog, CardId};
use crate::core::{GameState, InstanceId};
use crate::error::RuleViolation;
use crate::grid::Coord;
use crate::rules;

/// Owns the authoritative [`GameState`] and the catalog it plays with.
#[derive(Clone, Debug)]
pub struct Engine {
    catalog: CardCatalog,
    state: GameState,
}

impl Engine {
    /// Wrap an initial state with the catalog its cards come from.
    #[must_use]
    pub fn new(catalog: CardCatalog, state: GameState) -> Self {
        Self { catalog, state }
    }

    /// The current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The catalog backing this game.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Play a card by id for the active player.
    ///
    /// # Errors
    ///
    /// [`RuleViolation::UnknownCard`] for an id missing from the catalog,
    /// otherwise whatever [`rules::play_card`] rejects.
    pub fn play_card(&mut self, card: CardId, target: Coord) -> Result<(), RuleViolation> {
        let def = self
            .catalog
            .get(card)
            .ok_or(RuleViolation::UnknownCard(card))?;
        self.state = rules::play_card(&self.state, def, target)?;
        Ok(())
    }

    /// Move an alien instance for the active player.
    ///
    /// # Errors
    ///
    /// Whatever [`rules::move_alien`] rejects.
    pub fn move_alien(&mut self, instance: InstanceId, target: Coord) -> Result<(), RuleViolation> {
        self.state = rules::move_alien(&self.catalog, &self.state, instance, target)?;
        Ok(())
    }

    /// End the active player's turn.
    pub fn progress_turn(&mut self) {
        self.state = rules::progress_turn(&self.catalog, &self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::GameBuilder;

    #[test]
    fn test_unknown_card_is_rejected() {
        let catalog = CardCatalog::builtin();
        let state = GameBuilder::new().build(&catalog);
        let mut engine = Engine::new(catalog, state);

        let err = engine.play_card(CardId::new(999), Coord::new(0, 0)).unwrap_err();
        assert_eq!(err, RuleViolation::UnknownCard(CardId::new(999)));
    }

    #[test]
    fn test_rejected_action_leaves_state_alone() {
        let catalog = CardCatalog::builtin();
        let state = GameBuilder::new().build(&catalog);
        let mut engine = Engine::new(catalog, state);
        let before = engine.state().clone();

        // Cost 3 against 1 starting environment.
        let _ = engine.play_card(CardId::new(3), Coord::new(3, 5));

        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_play_and_progress() {
        let catalog = CardCatalog::builtin();
        let state = GameBuilder::new().build(&catalog);
        let mut engine = Engine::new(catalog, state);

        engine.play_card(CardId::new(1), Coord::new(3, 5)).unwrap();
        assert_eq!(engine.state().instances.len(), 1);

        engine.progress_turn();
        assert_eq!(engine.state().active_side, crate::core::Side::Native);
    }
}
