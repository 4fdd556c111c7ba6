//! Rule-violation errors.
//!
//! Every rejected action surfaces as a `RuleViolation`; its `Display`
//! rendering is the message shown to the player. Nothing in the core
//! panics or throws across the public boundary, and a rejected action
//! leaves the caller's snapshot untouched.

use thiserror::Error;

use crate::cards::CardId;
use crate::core::InstanceId;
use crate::grid::Coord;

/// A player action the rules refuse.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleViolation {
    /// The active player cannot afford the action.
    #[error("not enough environment: need {needed}, have {available}")]
    InsufficientEnvironment {
        /// Cost of the action.
        needed: u32,
        /// What the player has.
        available: u32,
    },

    /// The target coordinate is off the board.
    #[error("target cell {0} is outside the field")]
    OutOfBounds(Coord),

    /// Alien cards cannot take root on empty, pending, or core squares.
    #[error("an alien cannot take root on the cell at {at}")]
    IllegalAlienTarget {
        /// The refused square.
        at: Coord,
    },

    /// Non-species recovery only applies to empty or pending squares.
    #[error("the cell at {at} cannot be recovered")]
    IllegalRecoveryTarget {
        /// The refused square.
        at: Coord,
    },

    /// Native territory cannot be eradicated.
    #[error("native habitat at {at} cannot be eradicated")]
    IllegalEradicationTarget {
        /// The refused square.
        at: Coord,
    },

    /// The referenced instance is not on the field.
    #[error("no alien instance {0} is active")]
    UnknownInstance(InstanceId),

    /// The referenced card is not in the catalog.
    #[error("no card {0} in the catalog")]
    UnknownCard(CardId),

    /// Aliens only move onto squares they dominate.
    #[error("{instance} cannot move to {at}: not a cell it dominates")]
    IllegalMoveTarget {
        /// The instance asked to move.
        instance: InstanceId,
        /// The refused square.
        at: Coord,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_human_readable() {
        let err = RuleViolation::InsufficientEnvironment {
            needed: 3,
            available: 1,
        };
        assert_eq!(err.to_string(), "not enough environment: need 3, have 1");

        let err = RuleViolation::IllegalMoveTarget {
            instance: InstanceId(4),
            at: Coord::new(2, 2),
        };
        assert_eq!(
            err.to_string(),
            "Alien(4) cannot move to (2, 2): not a cell it dominates"
        );
    }
}
