//! File-backed snapshot repository.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::SessionState;

use super::{RepositoryError, SnapshotRepository};

/// Stores the session snapshot as a single JSON file.
///
/// Writes go through a temp file in the same directory followed by a
/// rename, so a crash mid-write never leaves a truncated snapshot behind.
pub struct FileSnapshotRepository {
    path: PathBuf,
}

impl FileSnapshotRepository {
    /// Creates the repository, making the parent directory if needed.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let path = path.into();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl SnapshotRepository for FileSnapshotRepository {
    fn save(&self, state: &SessionState) -> Result<(), RepositoryError> {
        let json =
            serde_json::to_vec_pretty(state).map_err(|e| RepositoryError::Json(e.to_string()))?;

        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;

        tracing::debug!(path = %self.path.display(), "saved snapshot");
        Ok(())
    }

    fn load(&self) -> Result<Option<SessionState>, RepositoryError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path)?;
        let state: SessionState = serde_json::from_slice(&bytes)
            .map_err(|e| RepositoryError::CorruptSnapshot(e.to_string()))?;
        state
            .validate()
            .map_err(|e| RepositoryError::CorruptSnapshot(e.to_string()))?;

        tracing::debug!(path = %self.path.display(), "loaded snapshot");
        Ok(Some(state))
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn delete(&self) -> Result<(), RepositoryError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
