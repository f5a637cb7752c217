//! Structured action log.
//!
//! The engine never formats prose. Every resolver branch reports a
//! [`LogEvent`] carrying a stable message key plus the parameters a
//! localization layer needs to render the final sentence.

use std::collections::VecDeque;

use super::face::Direction;
use crate::config::GameConfig;

/// One structured log event, successful or an explicit no-op reason.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum LogEvent {
    // Warm-up
    PileGrab { actor: String, count: u32 },
    NothingToGive { actor: String },
    TributeGiven { actor: String, target: String },
    NoUnlockedToSteal,
    GiftStolen { actor: String, target: String },
    TinyTossRight,
    MegaMoveLeft,
    // Endgame
    NothingToFreeze { actor: String },
    GiftFrozen { actor: String },
    NoSwapTarget { actor: String },
    UnlockedSwapped { actor: String, target: String },
    TrashMissingUnlocked,
    TrashNoTarget,
    TrashTraded { actor: String, target: String },
    JokerNotEnoughPlayers,
    JokerMissingUnlocked,
    JokerSwapped { first: String, second: String },
    SantaNothingToGive { actor: String },
    SantaGave { actor: String, target: String },
    TwistRotated { direction: Direction },
    // Phase machine
    EndgameBegins,
}

impl LogEvent {
    /// Stable message key for the localization provider.
    pub fn key(&self) -> &'static str {
        match self {
            LogEvent::PileGrab { .. } => "log.warmup.grab",
            LogEvent::NothingToGive { .. } => "log.warmup.nothing_to_give",
            LogEvent::TributeGiven { .. } => "log.warmup.gave",
            LogEvent::NoUnlockedToSteal => "log.warmup.no_unlocked_steal",
            LogEvent::GiftStolen { .. } => "log.warmup.steal",
            LogEvent::TinyTossRight => "log.warmup.tiny",
            LogEvent::MegaMoveLeft => "log.warmup.mega",
            LogEvent::NothingToFreeze { .. } => "log.endgame.no_freeze",
            LogEvent::GiftFrozen { .. } => "log.endgame.freeze",
            LogEvent::NoSwapTarget { .. } => "log.endgame.no_swap",
            LogEvent::UnlockedSwapped { .. } => "log.endgame.flip",
            LogEvent::TrashMissingUnlocked => "log.endgame.trash.missing",
            LogEvent::TrashNoTarget => "log.endgame.trash.not_enough",
            LogEvent::TrashTraded { .. } => "log.endgame.trash.swap",
            LogEvent::JokerNotEnoughPlayers => "log.endgame.joker.not_enough",
            LogEvent::JokerMissingUnlocked => "log.endgame.joker.missing",
            LogEvent::JokerSwapped { .. } => "log.endgame.joker.swap",
            LogEvent::SantaNothingToGive { .. } => "log.endgame.santa.none",
            LogEvent::SantaGave { .. } => "log.endgame.santa.gave",
            LogEvent::TwistRotated { .. } => "log.endgame.twist",
            LogEvent::EndgameBegins => "log.phase.endgame_begins",
        }
    }
}

/// A log entry with its append-order id.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub id: u64,
    pub event: LogEvent,
}

/// Bounded ring of log entries, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameLog {
    entries: VecDeque<LogEntry>,
    next_id: u64,
}

impl GameLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event as the newest entry, evicting the oldest past
    /// capacity.
    pub fn push(&mut self, event: LogEvent) {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push_front(LogEntry { id, event });
        self.entries.truncate(GameConfig::LOG_CAPACITY);
    }

    /// Entries newest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn newest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_entry_is_first() {
        let mut log = GameLog::new();
        log.push(LogEvent::TinyTossRight);
        log.push(LogEvent::MegaMoveLeft);
        assert_eq!(log.newest().unwrap().event, LogEvent::MegaMoveLeft);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn ring_truncates_at_capacity() {
        let mut log = GameLog::new();
        for i in 0..(GameConfig::LOG_CAPACITY as u32 + 10) {
            log.push(LogEvent::PileGrab {
                actor: "a".into(),
                count: i,
            });
        }
        assert_eq!(log.len(), GameConfig::LOG_CAPACITY);
        // The newest entry survives, the oldest were evicted.
        assert_eq!(
            log.newest().unwrap().event,
            LogEvent::PileGrab {
                actor: "a".into(),
                count: GameConfig::LOG_CAPACITY as u32 + 9
            }
        );
    }
}
