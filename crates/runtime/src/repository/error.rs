use thiserror::Error;

/// Errors surfaced by snapshot repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    /// The snapshot exists but is structurally invalid. Callers fall back
    /// to a fresh setup instead of crashing.
    #[error("corrupted snapshot: {0}")]
    CorruptSnapshot(String),
}
