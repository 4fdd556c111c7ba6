//! Player sides and per-side data storage.
//!
//! The simulation is strictly two-sided and asymmetric: the native side
//! defends territory, the alien side invades it. `SideMap` is the per-side
//! analogue of a per-player vector, with O(1) indexing by [`Side`].

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// The two sides of the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Defends and regrows territory.
    Native,
    /// Spawns and spreads invaders.
    Alien,
}

impl Side {
    /// Both sides, native first.
    pub const ALL: [Side; 2] = [Side::Native, Side::Alien];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Native => Side::Alien,
            Side::Alien => Side::Native,
        }
    }

    const fn index(self) -> usize {
        match self {
            Side::Native => 0,
            Side::Alien => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Native => write!(f, "native"),
            Side::Alien => write!(f, "alien"),
        }
    }
}

/// Vertical mirroring applied to a player's directional targeting.
///
/// The far-side player sees the board upside down: their `up` is the
/// near-side player's `down`. Horizontal directions are unaffected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    /// Near side; vertical offsets apply as-is.
    Normal,
    /// Far side; vertical offsets are negated.
    Mirrored,
}

impl Facing {
    /// Sign multiplier applied to vertical offsets.
    #[must_use]
    pub const fn factor(self) -> i32 {
        match self {
            Facing::Normal => 1,
            Facing::Mirrored => -1,
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use overgrowth::core::{Side, SideMap};
///
/// let mut env: SideMap<u32> = SideMap::new(3, 5);
/// assert_eq!(env[Side::Native], 3);
///
/// env[Side::Alien] += 1;
/// assert_eq!(env[Side::Alien], 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map from per-side values.
    #[must_use]
    pub fn new(native: T, alien: T) -> Self {
        Self {
            data: [native, alien],
        }
    }

    /// Create a map with both entries set to the same value.
    #[must_use]
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value)
    }

    /// Iterate over `(Side, &T)` pairs, native first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over `(Side, &mut T)` pairs, native first.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        Side::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        &self.data[side.index()]
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }
}
