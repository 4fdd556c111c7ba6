//! # overgrowth
//!
//! A deterministic, turn-based territory-control card game engine.
//!
//! Two asymmetric sides fight over a fixed grid: the alien side plays
//! cards that root mobile invaders which grow and spread every turn; the
//! native side eradicates invaders and regrows lost ground. The crate is
//! the rules core only — rendering, input, and transport live elsewhere
//! and consume the state read-only.
//!
//! ## Design Principles
//!
//! 1. **Immutable snapshots**: every rules entry point consumes a state
//!    and returns a brand-new one. `im` persistent collections make the
//!    clone cheap, and any number of observers can keep reading the prior
//!    snapshot while a new one is built.
//!
//! 2. **Deterministic**: no RNG, clock, or I/O anywhere in the core.
//!    Identical inputs always produce identical outputs, across many
//!    compounding turns.
//!
//! 3. **Closed sum types**: cells, card kinds, and targeting are
//!    exhaustive enums; adding a variant breaks consumers at compile time
//!    rather than silently at runtime.
//!
//! 4. **Errors are messages**: rejected actions return a [`RuleViolation`]
//!    whose `Display` is the player-facing text. Validation finishes
//!    before any part of a new state exists.
//!
//! ## Modules
//!
//! - `core`: sides, players, alien instances, the top-level [`GameState`]
//! - `grid`: coordinates, the cell sum type, and the playing field
//! - `cards`: card definitions, targeting descriptors, and the catalog
//! - `effects`: the pure effect-range resolver
//! - `rules`: validation/application, growth, spread, regrowth, turns
//! - `engine`: a façade owning one state and exposing the entry points
//! - `setup`: match settings and the initial-state builder

pub mod cards;
pub mod core;
pub mod effects;
pub mod engine;
pub mod error;
pub mod grid;
pub mod rules;
pub mod setup;

// Re-export commonly used types
pub use crate::cards::{
    CardCatalog, CardDefinition, CardId, CardKind, ClearedState, Direction, GrowthCondition,
    GrowthEffect, GrowthStage, RecoveredState, Shape, Targeting,
};

pub use crate::core::{
    AlienInstance, Cooldown, Facing, GameState, InstanceId, Phase, PlayerState, Side, SideMap,
};

pub use crate::effects::{effect_range, targeting_range, EffectRange};

pub use crate::engine::Engine;

pub use crate::error::RuleViolation;

pub use crate::grid::{Cell, Coord, Field};

pub use crate::rules::{move_alien, play_card, progress_turn};

pub use crate::setup::{GameBuilder, GameSettings};
