//! Effect computation: the pure range resolver.

pub mod range;

pub use range::{effect_range, targeting_range, EffectRange};
