//! Game setup: match settings and the initial-state builder.

use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, CardDefinition};
use crate::core::{Facing, GameState, PlayerState, Side, SideMap};
use crate::grid::Field;

/// Board and match parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Field width in squares.
    pub field_width: u32,
    /// Field height in squares.
    pub field_height: u32,
    /// Turn after which the game ends.
    pub maximum_turns: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            field_width: 7,
            field_height: 10,
            maximum_turns: 8,
        }
    }
}

/// Builder for a fresh game.
///
/// ## Example
///
/// ```
/// use overgrowth::cards::CardCatalog;
/// use overgrowth::core::Side;
/// use overgrowth::setup::GameBuilder;
///
/// let catalog = CardCatalog::builtin();
/// let state = GameBuilder::new()
///     .player_names("Ranger", "Kudzu")
///     .handicaps(2, 1)
///     .build(&catalog);
///
/// assert_eq!(state.players[Side::Native].name, "Ranger");
/// assert_eq!(state.turn, 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    settings: GameSettings,
    native_name: String,
    alien_name: String,
    native_environment: u32,
    alien_environment: u32,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            settings: GameSettings::default(),
            native_name: "Native".to_string(),
            alien_name: "Alien".to_string(),
            native_environment: 1,
            alien_environment: 1,
        }
    }
}

impl GameBuilder {
    /// Start from the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the board and match parameters.
    #[must_use]
    pub fn settings(mut self, settings: GameSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Set both display names.
    #[must_use]
    pub fn player_names(mut self, native: impl Into<String>, alien: impl Into<String>) -> Self {
        self.native_name = native.into();
        self.alien_name = alien.into();
        self
    }

    /// Handicap baselines; environment replenishes to
    /// `(turn - 1) + baseline` each turn.
    #[must_use]
    pub fn handicaps(mut self, native: u32, alien: u32) -> Self {
        self.native_environment = native;
        self.alien_environment = alien;
        self
    }

    /// Build the initial state: a fully native board, libraries dealt from
    /// the catalog, and the alien side to act first.
    #[must_use]
    pub fn build(self, catalog: &CardCatalog) -> GameState {
        let field = Field::all_native(self.settings.field_width, self.settings.field_height);

        let mut native = PlayerState::new(
            Side::Native,
            self.native_name,
            Facing::Normal,
            self.native_environment,
        );
        let mut alien = PlayerState::new(
            Side::Alien,
            self.alien_name,
            Facing::Mirrored,
            self.alien_environment,
        );

        for player in [&mut native, &mut alien] {
            let mut cards: Vec<&CardDefinition> = catalog.for_side(player.side).collect();
            cards.sort_by_key(|c| c.id);
            for card in cards {
                for _ in 0..card.deck_count {
                    player.library.push_back(card.id);
                }
            }
        }

        GameState::new(field, SideMap::new(native, alien), self.settings.maximum_turns)
    }
}
