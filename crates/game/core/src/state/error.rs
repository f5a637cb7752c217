//! Structural validation errors for restored session states.

use thiserror::Error;

use super::Phase;

/// Reasons a deserialized snapshot is structurally unusable.
///
/// Hosts map these to their corrupt-snapshot handling and fall back to a
/// fresh setup state instead of crashing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("roster is empty while phase is {0}")]
    EmptyRoster(Phase),

    #[error("current player index {index} is out of range for {players} players")]
    PlayerIndexOutOfRange { index: usize, players: usize },

    #[error("roll budget covers {got} seats but the roster has {expected}")]
    BudgetLenMismatch { got: usize, expected: usize },

    #[error("warm-up counters cover {got} seats but the roster has {expected}")]
    CounterLenMismatch { got: usize, expected: usize },

    #[error("duplicate gift id {0}")]
    DuplicateGiftId(u64),
}
