//! Card system: static definitions and the catalog.

pub mod catalog;
pub mod definition;

pub use catalog::CardCatalog;
pub use definition::{
    CardDefinition, CardId, CardKind, ClearedState, Direction, GrowthCondition, GrowthEffect,
    GrowthStage, RecoveredState, Shape, Targeting,
};
