//! Error types surfaced by the runtime layer.

use game_core::{RollError, SetupError};

use crate::repository::RepositoryError;

/// Umbrella over engine rejections and persistence failures.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Roll(#[from] RollError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("no prepared roll to commit")]
    NoPreparedRoll,

    #[error("no snapshot repository is configured")]
    NoRepository,
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
