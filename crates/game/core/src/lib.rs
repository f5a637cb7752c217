//! Deterministic rules engine for the gift-exchange party game.
//!
//! `game-core` defines the canonical rules (action tables, resolvers, turn
//! engine) and exposes pure APIs that hosts drive. All state mutation flows
//! through [`engine::GameEngine`], randomness comes exclusively from the
//! injected [`env::RngOracle`], and supporting crates depend on the types
//! re-exported here.
pub mod config;
pub mod engine;
pub mod env;
pub mod resolve;
pub mod select;
pub mod state;
pub mod tables;

pub use config::GameConfig;
pub use engine::{GameEngine, PreparedRoll, RollError, RollPlan, RollReport, SetupError};
pub use env::{GameEnv, RngOracle, SplitMixOracle, derive_seed};
pub use resolve::{
    EndgameOptions, Resolution, WarmupTargets, choose_endgame_options, choose_warmup_targets,
    resolve_endgame, resolve_warmup,
};
pub use select::select_weighted;
pub use state::{
    Direction, EndgameAction, Face, GameLog, Gift, GiftId, GiftIdAllocator, LogEntry, LogEvent,
    Narrative, Phase, Player, PlayerId, RollOutcome, Roster, SessionState, SetupState, StateError,
    TurnState, WarmupAction,
};
pub use tables::{ActionEntry, ActionTable};
