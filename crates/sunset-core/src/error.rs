//! Errors for simulation requests that are rejected rather than clamped.

use thiserror::Error;

/// A request the simulation refused to carry out. Callers log these and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("enemy index {index} out of range ({count} enemies)")]
    EnemyIndexOutOfRange { index: usize, count: usize },

    #[error("enemy {index} is dead")]
    EnemyDead { index: usize },

    /// Origin and target coincide, so there is no direction to cast along.
    #[error("zero-length direction")]
    DegenerateDirection,
}
