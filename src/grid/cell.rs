//! Grid coordinates and the cell sum type.
//!
//! Every square on the field is exactly one of five territory states.
//! The enum is closed on purpose: consumers match exhaustively, so a new
//! state cannot slip past existing code unhandled.

use serde::{Deserialize, Serialize};

use crate::core::{InstanceId, Side};

/// A coordinate on the field.
///
/// Signed, so off-board offsets can exist prior to bounds filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Column, 0-based from the left.
    pub x: i32,
    /// Row, 0-based from the near edge.
    pub y: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by an offset.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One square of territory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Owned by the native side.
    Native {
        /// Position on the field.
        at: Coord,
    },
    /// Unowned ground.
    Empty {
        /// Position on the field.
        at: Coord,
    },
    /// Unowned; regrows on the next native activation.
    RecoveryPending {
        /// Position on the field.
        at: Coord,
        /// Turn this square entered the pending state.
        since_turn: u32,
    },
    /// The square an alien instance physically occupies.
    AlienCore {
        /// Position on the field.
        at: Coord,
        /// The occupying instance.
        instance: InstanceId,
    },
    /// Territory dominated by an alien instance rooted elsewhere.
    Invasion {
        /// Position on the field.
        at: Coord,
        /// The instance currently credited with this square.
        dominant: InstanceId,
    },
}

impl Cell {
    /// A native-owned square.
    #[must_use]
    pub const fn native(at: Coord) -> Self {
        Cell::Native { at }
    }

    /// An unowned square.
    #[must_use]
    pub const fn empty(at: Coord) -> Self {
        Cell::Empty { at }
    }

    /// A square awaiting regrowth, stamped with the current turn.
    #[must_use]
    pub const fn recovery_pending(at: Coord, since_turn: u32) -> Self {
        Cell::RecoveryPending { at, since_turn }
    }

    /// The core square of an alien instance.
    #[must_use]
    pub const fn alien_core(at: Coord, instance: InstanceId) -> Self {
        Cell::AlienCore { at, instance }
    }

    /// A square dominated by an alien instance.
    #[must_use]
    pub const fn invasion(at: Coord, dominant: InstanceId) -> Self {
        Cell::Invasion { at, dominant }
    }

    /// This square's position.
    #[must_use]
    pub const fn coord(&self) -> Coord {
        match *self {
            Cell::Native { at }
            | Cell::Empty { at }
            | Cell::RecoveryPending { at, .. }
            | Cell::AlienCore { at, .. }
            | Cell::Invasion { at, .. } => at,
        }
    }

    /// The side that owns this square, if any.
    #[must_use]
    pub const fn owner(&self) -> Option<Side> {
        match self {
            Cell::Native { .. } => Some(Side::Native),
            Cell::AlienCore { .. } | Cell::Invasion { .. } => Some(Side::Alien),
            Cell::Empty { .. } | Cell::RecoveryPending { .. } => None,
        }
    }

    /// The instance credited with this square: a core's occupant or an
    /// invasion square's dominant.
    #[must_use]
    pub const fn dominant_instance(&self) -> Option<InstanceId> {
        match *self {
            Cell::AlienCore { instance, .. } => Some(instance),
            Cell::Invasion { dominant, .. } => Some(dominant),
            Cell::Native { .. } | Cell::Empty { .. } | Cell::RecoveryPending { .. } => None,
        }
    }
}
