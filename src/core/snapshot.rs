//! Binary state snapshots.
//!
//! The state is plain acyclic data, so hosts that want save/restore can
//! serialize it wholesale; no bespoke persistence format is committed to.

use super::state::GameState;

/// Encode a state snapshot.
///
/// # Errors
///
/// Returns the underlying serialization error; with the in-memory model
/// this does not happen in practice.
pub fn to_bytes(state: &GameState) -> Result<Vec<u8>, bincode::Error> {
    bincode::serialize(state)
}

/// Decode a state snapshot produced by [`to_bytes`].
///
/// # Errors
///
/// Returns a decode error for truncated or foreign input.
pub fn from_bytes(bytes: &[u8]) -> Result<GameState, bincode::Error> {
    bincode::deserialize(bytes)
}
