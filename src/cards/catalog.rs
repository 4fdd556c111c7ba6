//! Card catalog: definition lookup and the builtin card set.
//!
//! The `CardCatalog` stores all card definitions for a game and provides
//! fast lookup by `CardId`. [`CardCatalog::builtin`] ships the standard
//! master data both sides play with.

use rustc_hash::FxHashMap;

use super::definition::{
    CardDefinition, CardId, CardKind, ClearedState, Direction, GrowthEffect, GrowthStage,
    RecoveredState, Shape, Targeting,
};
use crate::core::Side;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use overgrowth::cards::{CardCatalog, CardDefinition, CardId, CardKind, Shape, Targeting};
/// use overgrowth::cards::ClearedState;
///
/// let mut catalog = CardCatalog::new();
///
/// let weeding = CardDefinition::new(
///     CardId::new(10),
///     "Hand Weeding",
///     1,
///     CardKind::Eradication {
///         targeting: Targeting::shaped(Shape::Single, 1),
///         post_removal: ClearedState::Empty,
///     },
/// );
/// catalog.register(weeding);
///
/// assert_eq!(catalog.get(CardId::new(10)).unwrap().name, "Hand Weeding");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.cards.insert(card.id, card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Cards belonging to a side's library.
    pub fn for_side(&self, side: Side) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values().filter(move |c| c.side() == side)
    }

    /// The builtin card set.
    ///
    /// Alien ids start at 1, eradication at 10, recovery at 20.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();

        // --- Alien side ---

        catalog.register(
            CardDefinition::new(
                CardId::new(1),
                "Creeping Knotweed",
                1,
                CardKind::Alien {
                    targeting: Targeting::shaped(Shape::Single, 1),
                    growth: vec![GrowthStage::after_idle_turns(
                        2,
                        GrowthEffect {
                            power: Some(1),
                            shape: Some(Shape::Cross),
                        },
                    )],
                },
            )
            .with_description("Cheap ground cover that sprawls once established.")
            .with_deck_count(3),
        );

        catalog.register(
            CardDefinition::new(
                CardId::new(2),
                "Strangler Vine",
                2,
                CardKind::Alien {
                    targeting: Targeting::shaped(Shape::Cross, 1),
                    growth: vec![
                        GrowthStage::after_idle_turns(
                            2,
                            GrowthEffect {
                                power: Some(2),
                                shape: None,
                            },
                        ),
                        GrowthStage::after_idle_turns(
                            3,
                            GrowthEffect {
                                power: Some(2),
                                shape: Some(Shape::Range),
                            },
                        ),
                    ],
                },
            )
            .with_description("Smothers its neighbors, then everything around them.")
            .with_deck_count(2),
        );

        catalog.register(
            CardDefinition::new(
                CardId::new(3),
                "Water Hyacinth",
                3,
                CardKind::Alien {
                    targeting: Targeting::shaped(Shape::Range, 2),
                    growth: vec![],
                },
            )
            .with_description("Blankets a wide patch from the moment it lands.")
            .with_deck_count(2),
        );

        catalog.register(
            CardDefinition::new(
                CardId::new(4),
                "Runner Bamboo",
                2,
                CardKind::Alien {
                    targeting: Targeting::straight(2, Direction::Vertical),
                    growth: vec![GrowthStage::after_idle_turns(
                        2,
                        GrowthEffect {
                            power: Some(3),
                            shape: None,
                        },
                    )],
                },
            )
            .with_description("Sends runners in a line; longer ones when left alone.")
            .with_deck_count(2),
        );

        // --- Native side: eradication ---

        catalog.register(
            CardDefinition::new(
                CardId::new(10),
                "Hand Weeding",
                1,
                CardKind::Eradication {
                    targeting: Targeting::shaped(Shape::Single, 1),
                    post_removal: ClearedState::Empty,
                },
            )
            .with_description("Pull one invader out by the roots.")
            .with_deck_count(3),
        );

        catalog.register(
            CardDefinition::new(
                CardId::new(11),
                "Controlled Burn",
                3,
                CardKind::Eradication {
                    targeting: Targeting::shaped(Shape::Range, 2),
                    post_removal: ClearedState::Empty,
                },
            )
            .with_description("Scorch a patch clean; nothing grows back right away.")
            .with_deck_count(1)
            .with_cooldown(2),
        );

        catalog.register(
            CardDefinition::new(
                CardId::new(12),
                "Targeted Herbicide",
                2,
                CardKind::Eradication {
                    targeting: Targeting::Species,
                    post_removal: ClearedState::RecoveryPending,
                },
            )
            .with_description("Wipes a whole species and leaves the soil ready to heal.")
            .with_deck_count(1)
            .with_usage_limit(2),
        );

        // --- Native side: recovery ---

        catalog.register(
            CardDefinition::new(
                CardId::new(20),
                "Replanting",
                1,
                CardKind::Recovery {
                    targeting: Targeting::shaped(Shape::Single, 1),
                    post_recovery: RecoveredState::RecoveryPending,
                },
            )
            .with_description("Start one square on the road back.")
            .with_deck_count(3),
        );

        catalog.register(
            CardDefinition::new(
                CardId::new(21),
                "Soil Restoration",
                2,
                CardKind::Recovery {
                    targeting: Targeting::shaped(Shape::Cross, 1),
                    post_recovery: RecoveredState::Native,
                },
            )
            .with_description("Rebuild a cross of ground to full health at once.")
            .with_deck_count(2)
            .with_cooldown(1),
        );

        catalog.register(
            CardDefinition::new(
                CardId::new(22),
                "Seed Bank",
                3,
                CardKind::Recovery {
                    targeting: Targeting::shaped(Shape::Range, 2),
                    post_recovery: RecoveredState::Native,
                },
            )
            .with_description("One shot of stored diversity restores a whole patch.")
            .with_deck_count(1)
            .with_usage_limit(1),
        );

        catalog.register(
            CardDefinition::new(
                CardId::new(23),
                "Mycorrhizal Network",
                3,
                CardKind::Recovery {
                    targeting: Targeting::Species,
                    post_recovery: RecoveredState::Native,
                },
            )
            .with_description("Reclaims every square one species holds, core and all.")
            .with_deck_count(1)
            .with_usage_limit(1),
        );

        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut catalog = CardCatalog::new();

        catalog.register(CardDefinition::new(
            CardId::new(1),
            "Test",
            1,
            CardKind::Alien {
                targeting: Targeting::shaped(Shape::Single, 1),
                growth: vec![],
            },
        ));

        assert!(catalog.contains(CardId::new(1)));
        assert_eq!(catalog.get(CardId::new(1)).unwrap().name, "Test");
        assert!(catalog.get(CardId::new(99)).is_none());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut catalog = CardCatalog::new();
        let card = |name: &str| {
            CardDefinition::new(
                CardId::new(1),
                name,
                1,
                CardKind::Alien {
                    targeting: Targeting::shaped(Shape::Single, 1),
                    growth: vec![],
                },
            )
        };

        catalog.register(card("A"));
        catalog.register(card("B")); // Should panic
    }

    #[test]
    fn test_builtin_split_by_side() {
        let catalog = CardCatalog::builtin();

        let alien: Vec<_> = catalog.for_side(Side::Alien).collect();
        let native: Vec<_> = catalog.for_side(Side::Native).collect();

        assert_eq!(alien.len() + native.len(), catalog.len());
        assert!(alien.iter().all(|c| matches!(c.kind, CardKind::Alien { .. })));
        assert!(native.iter().all(|c| !matches!(c.kind, CardKind::Alien { .. })));
    }

    #[test]
    fn test_builtin_has_grower_and_species_cards() {
        let catalog = CardCatalog::builtin();

        assert!(catalog.iter().any(|c| c.growth().len() > 1));
        assert!(catalog
            .iter()
            .any(|c| matches!(c.targeting(), Targeting::Species)));
        assert!(catalog.iter().any(|c| matches!(
            c.targeting(),
            Targeting::Shaped {
                shape: Shape::Straight,
                direction: Some(_),
                ..
            }
        )));
    }

    #[test]
    fn test_builtin_straight_cards_carry_directions() {
        let catalog = CardCatalog::builtin();

        for card in catalog.iter() {
            if let Targeting::Shaped {
                shape: Shape::Straight,
                direction,
                ..
            } = card.targeting()
            {
                assert!(direction.is_some(), "{} lacks a direction", card.name);
            }
        }
    }
}
