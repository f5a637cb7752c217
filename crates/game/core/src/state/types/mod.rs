//! Core entity types for the session state.
mod face;
mod gift;
mod log;
mod outcome;
mod phase;
mod player;

pub use face::{Direction, EndgameAction, Face, WarmupAction};
pub use gift::{Gift, GiftId, GiftIdAllocator};
pub use log::{GameLog, LogEntry, LogEvent};
pub use outcome::{Narrative, RollOutcome};
pub use phase::Phase;
pub use player::{Player, PlayerId, Roster};
