//! Card definitions - static card data.
//!
//! A `CardDefinition` holds the immutable properties of a card: its cost,
//! what it targets, and what family of effect it applies. Everything that
//! changes during play (position, growth stage, cooldowns, usage counts)
//! lives on `AlienInstance` and `PlayerState` instead.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Unique identifier for a card definition.
///
/// Identifies the "type" of card, not a copy in a player's library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Geometric footprint shapes a card or a grown alien can project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// The anchor square only.
    Single,
    /// The anchor plus arms of length `power` along both axes.
    Cross,
    /// A square of side `2 * power - 1` centered on the anchor.
    Range,
    /// A line (or two opposite lines) of length `power` from the anchor.
    Straight,
}

/// Direction of a straight-line footprint.
///
/// `Vertical` and `Horizon` are the two-way variants along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward the far edge.
    Up,
    /// Toward the near edge.
    Down,
    /// Toward the left edge.
    Left,
    /// Toward the right edge.
    Right,
    /// Both up and down.
    Vertical,
    /// Both left and right.
    Horizon,
}

/// How a card selects the squares it affects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Targeting {
    /// A geometric footprint around the anchor square.
    ///
    /// `direction` is `Some` exactly when `shape` is [`Shape::Straight`]
    /// in catalog data. A directionless straight footprint can still arise
    /// when an alien grows into the shape; the resolver falls back to
    /// [`Direction::Vertical`] and warns (see `effects::range`).
    Shaped {
        /// Footprint shape.
        shape: Shape,
        /// Footprint reach.
        power: u32,
        /// Line direction for straight footprints.
        direction: Option<Direction>,
    },
    /// Every square credited to the instance found at the anchor square.
    Species,
}

impl Targeting {
    /// A shaped footprint with no direction.
    #[must_use]
    pub const fn shaped(shape: Shape, power: u32) -> Self {
        Self::Shaped {
            shape,
            power,
            direction: None,
        }
    }

    /// A straight-line footprint.
    #[must_use]
    pub const fn straight(power: u32, direction: Direction) -> Self {
        Self::Shaped {
            shape: Shape::Straight,
            power,
            direction: Some(direction),
        }
    }
}

/// What an eradicated square becomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClearedState {
    /// Bare ground.
    Empty,
    /// Ground already queued for regrowth.
    RecoveryPending,
}

/// What a recovered square becomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecoveredState {
    /// Fully native territory.
    Native,
    /// Ground queued for regrowth.
    RecoveryPending,
}

/// Conditions an alien must meet to advance a growth stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrowthCondition {
    /// The alien has neither moved nor grown for this many turns.
    TurnsSinceLastAction {
        /// Idle turns required.
        turns: u32,
    },
}

/// Stat overrides applied when a growth stage completes.
///
/// Carries no direction on purpose, even when `shape` becomes
/// [`Shape::Straight`]; see the resolver's fallback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GrowthEffect {
    /// New invasion power, if overridden.
    pub power: Option<u32>,
    /// New invasion shape, if overridden.
    pub shape: Option<Shape>,
}

/// One growth step: the condition gating it and the overrides it applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GrowthStage {
    /// Gate for this stage.
    pub condition: GrowthCondition,
    /// Overrides applied when the gate opens.
    pub effect: GrowthEffect,
}

impl GrowthStage {
    /// A stage gated on idle turns.
    #[must_use]
    pub const fn after_idle_turns(turns: u32, effect: GrowthEffect) -> Self {
        Self {
            condition: GrowthCondition::TurnsSinceLastAction { turns },
            effect,
        }
    }
}

/// The three card families.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Roots a new alien instance on the target square.
    Alien {
        /// Initial invasion footprint. Never [`Targeting::Species`].
        targeting: Targeting,
        /// Ordered growth stages, one per stage index.
        growth: Vec<GrowthStage>,
    },
    /// Clears alien presence from the footprint.
    Eradication {
        /// Affected squares.
        targeting: Targeting,
        /// State cleared squares are left in.
        post_removal: ClearedState,
    },
    /// Restores unowned squares in the footprint.
    Recovery {
        /// Affected squares.
        targeting: Targeting,
        /// State recovered squares are left in.
        post_recovery: RecoveredState,
    },
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use overgrowth::cards::{CardDefinition, CardId, CardKind, Shape, Targeting};
///
/// let card = CardDefinition::new(
///     CardId::new(1),
///     "Creeping Knotweed",
///     1,
///     CardKind::Alien {
///         targeting: Targeting::shaped(Shape::Single, 1),
///         growth: vec![],
///     },
/// )
/// .with_deck_count(3);
///
/// assert_eq!(card.cost, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this definition.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Flavor/rules text for display.
    pub description: String,

    /// Environment spent to play the card (and to move the alien it roots).
    pub cost: u32,

    /// Copies a library may contain.
    pub deck_count: u32,

    /// Plays allowed per game; `None` for unlimited.
    pub usage_limit: Option<u32>,

    /// Turns before the card can be played again; `None` for no cooldown.
    pub cooldown_turns: Option<u32>,

    /// Card family and its effect parameters.
    pub kind: CardKind,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, cost: u32, kind: CardKind) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            cost,
            deck_count: 1,
            usage_limit: None,
            cooldown_turns: None,
            kind,
        }
    }

    /// Set the display description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the library copy count (builder pattern).
    #[must_use]
    pub fn with_deck_count(mut self, count: u32) -> Self {
        self.deck_count = count;
        self
    }

    /// Limit total plays per game (builder pattern).
    #[must_use]
    pub fn with_usage_limit(mut self, limit: u32) -> Self {
        self.usage_limit = Some(limit);
        self
    }

    /// Add a cooldown after each play (builder pattern).
    #[must_use]
    pub fn with_cooldown(mut self, turns: u32) -> Self {
        self.cooldown_turns = Some(turns);
        self
    }

    /// The side whose library carries this card.
    #[must_use]
    pub fn side(&self) -> Side {
        match self.kind {
            CardKind::Alien { .. } => Side::Alien,
            CardKind::Eradication { .. } | CardKind::Recovery { .. } => Side::Native,
        }
    }

    /// The card's targeting descriptor.
    #[must_use]
    pub fn targeting(&self) -> Targeting {
        match self.kind {
            CardKind::Alien { targeting, .. }
            | CardKind::Eradication { targeting, .. }
            | CardKind::Recovery { targeting, .. } => targeting,
        }
    }

    /// Growth stages for alien cards; empty for the other families.
    #[must_use]
    pub fn growth(&self) -> &[GrowthStage] {
        match &self.kind {
            CardKind::Alien { growth, .. } => growth,
            CardKind::Eradication { .. } | CardKind::Recovery { .. } => &[],
        }
    }
}
