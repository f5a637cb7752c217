//! Snapshot persistence contracts and implementations.

mod error;
mod file;

pub use error::RepositoryError;
pub use file::FileSnapshotRepository;

use game_core::SessionState;

/// Repository for the single session snapshot.
///
/// A session has at most one snapshot; saving replaces the previous one.
pub trait SnapshotRepository: Send + Sync {
    /// Persists the state, replacing any existing snapshot.
    fn save(&self, state: &SessionState) -> Result<(), RepositoryError>;

    /// Loads the snapshot, or `None` when none was ever saved. A present
    /// but unreadable snapshot is `CorruptSnapshot`, never `None`.
    fn load(&self) -> Result<Option<SessionState>, RepositoryError>;

    fn exists(&self) -> bool;

    fn delete(&self) -> Result<(), RepositoryError>;
}
