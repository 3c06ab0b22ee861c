//! Shared match-level value types.

mod team;

pub use team::TeamSide;

/// Stable player identifier handed in by the host (roster slot, entity id, ...).
pub type PlayerId = u32;

/// Ground-plane position in meters: (x, z).
///
/// X runs goal-to-goal, Z runs touchline-to-touchline. Height is ignored by the core.
pub type PitchPos = (f32, f32);
