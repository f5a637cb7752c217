//! Runtime configuration.

use std::env;
use std::path::PathBuf;

/// Configuration for constructing a [`crate::GameSession`].
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Where the snapshot file lives.
    pub snapshot_path: PathBuf,
    /// Persist after every state-changing operation.
    pub autosave: bool,
    /// Fixed seed for reproducible sessions; random when absent.
    pub forced_seed: Option<u64>,
}

impl SessionConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GIFTSTORM_SNAPSHOT_PATH` - snapshot file (default: platform data dir)
    /// - `GIFTSTORM_AUTOSAVE` - persist after every change (default: true)
    /// - `GIFTSTORM_SEED` - fixed session seed (default: random)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = env::var("GIFTSTORM_SNAPSHOT_PATH").ok().map(PathBuf::from) {
            config.snapshot_path = path;
        }
        if let Some(autosave) = read_env::<bool>("GIFTSTORM_AUTOSAVE") {
            config.autosave = autosave;
        }
        config.forced_seed = read_env::<u64>("GIFTSTORM_SEED");

        config
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            autosave: true,
            forced_seed: None,
        }
    }
}

fn default_snapshot_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "giftstorm")
        .map(|dirs| dirs.data_dir().join("session.json"))
        .unwrap_or_else(|| PathBuf::from("giftstorm-session.json"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
