//! Host-side session orchestration.
//!
//! The rules engine in `game-core` is pure; this crate wraps it in a
//! [`GameSession`] that owns the session state, drives the engine, emits
//! `tracing` events, and persists snapshots through a pluggable
//! repository.

pub mod config;
pub mod error;
pub mod repository;
pub mod session;

pub use config::SessionConfig;
pub use error::{Result, RuntimeError};
pub use repository::{FileSnapshotRepository, RepositoryError, SnapshotRepository};
pub use session::GameSession;
