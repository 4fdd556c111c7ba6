//! Active alien instances.
//!
//! An instance is born when an alien card is played, wanders across
//! territory it dominates, grows while idle, and dies when it no longer
//! dominates a single square or is eradicated directly.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Shape};
use crate::grid::Coord;

/// Unique identifier for an alien instance on the field.
///
/// Allocated sequentially by the game state, so identical action sequences
/// allocate identical ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create a new instance ID.
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

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Alien({})", self.0)
    }
}

/// A living alien on the field.
///
/// `power` and `shape` start from the originating card's targeting and may
/// diverge after growth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlienInstance {
    /// This instance's id.
    pub id: InstanceId,

    /// The card definition it was played from.
    pub card: CardId,

    /// Turn the instance was placed.
    pub spawned_turn: u32,

    /// The core square it currently occupies.
    pub at: Coord,

    /// Current invasion reach.
    pub power: u32,

    /// Current invasion shape.
    pub shape: Shape,

    /// Index of the next growth stage to evaluate.
    pub growth_stage: usize,

    /// Turns since the instance last moved or grew.
    pub turns_since_last_action: u32,
}

impl AlienInstance {
    /// A freshly-rooted instance at growth stage zero.
    #[must_use]
    pub const fn new(
        id: InstanceId,
        card: CardId,
        shape: Shape,
        power: u32,
        at: Coord,
        spawned_turn: u32,
    ) -> Self {
        Self {
            id,
            card,
            spawned_turn,
            at,
            power,
            shape,
            growth_stage: 0,
            turns_since_last_action: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_instance_starts_fresh() {
        let alien = AlienInstance::new(
            InstanceId(3),
            CardId::new(1),
            Shape::Cross,
            2,
            Coord::new(4, 4),
            5,
        );

        assert_eq!(alien.growth_stage, 0);
        assert_eq!(alien.turns_since_last_action, 0);
        assert_eq!(alien.spawned_turn, 5);
        assert_eq!(alien.shape, Shape::Cross);
    }

    #[test]
    fn test_display() {
        assert_eq!(InstanceId(7).to_string(), "Alien(7)");
    }
}
