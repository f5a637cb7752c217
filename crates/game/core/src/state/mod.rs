//! Authoritative session state.
//!
//! This module owns the data structures describing the roster, the pile,
//! turn bookkeeping, and the bounded log. Hosts clone or query this state
//! but mutate it exclusively through the engine.
mod error;
mod turn;
pub mod types;

pub use error::StateError;
pub use turn::TurnState;
pub use types::{
    Direction, EndgameAction, Face, GameLog, Gift, GiftId, GiftIdAllocator, LogEntry, LogEvent,
    Narrative, Phase, Player, PlayerId, RollOutcome, Roster, WarmupAction,
};

use crate::config::GameConfig;

/// Setup-stage inputs, persisted so an interrupted setup can resume.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetupState {
    /// Player names pending for the next game start.
    pub names: Vec<String>,
    /// Pile size pending for the next game start.
    pub pile_size: u32,
}

/// Canonical snapshot of one game session.
///
/// This aggregate is the unit of persistence: serializing and
/// deserializing it reproduces an equivalent state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    /// RNG seed for deterministic draws. Set once at session creation.
    pub game_seed: u64,

    /// Roll counter; combined with `game_seed` and a per-draw context to
    /// derive unique seeds for every random event.
    pub nonce: u64,

    gift_ids: GiftIdAllocator,

    pub config: GameConfig,
    pub phase: Phase,
    pub roster: Roster,
    /// Undrawn gifts remaining in the shared pile.
    pub pile: u32,
    pub turn: TurnState,
    pub log: GameLog,
    pub last_outcome: Option<RollOutcome>,
    pub setup: SetupState,
}

impl SessionState {
    /// Fresh setup-phase state with the given seed.
    pub fn with_seed(game_seed: u64) -> Self {
        Self {
            game_seed,
            nonce: 0,
            gift_ids: GiftIdAllocator::new(),
            config: GameConfig::default(),
            phase: Phase::Setup,
            roster: Roster::default(),
            pile: 0,
            turn: TurnState::default(),
            log: GameLog::new(),
            last_outcome: None,
            setup: SetupState::default(),
        }
    }

    /// Allocates a fresh gift id.
    pub fn allocate_gift_id(&mut self) -> GiftId {
        self.gift_ids.allocate()
    }

    /// Mutable access to the allocator, for resolvers that draw from the
    /// pile.
    pub fn gift_ids_mut(&mut self) -> &mut GiftIdAllocator {
        &mut self.gift_ids
    }

    /// Total gift count: pile plus everything held by players.
    ///
    /// Conserved by every resolved action; only pile draws move gifts
    /// across the boundary and only reset destroys them.
    pub fn total_gifts(&self) -> u32 {
        self.pile + self.roster.total_gifts()
    }

    /// Structural integrity check for restored snapshots.
    pub fn validate(&self) -> Result<(), StateError> {
        if self.phase == Phase::Setup {
            return Ok(());
        }

        let players = self.roster.len();
        if players == 0 {
            return Err(StateError::EmptyRoster(self.phase));
        }
        if self.turn.current_player >= players {
            return Err(StateError::PlayerIndexOutOfRange {
                index: self.turn.current_player,
                players,
            });
        }
        if self.turn.roll_budget.len() != players {
            return Err(StateError::BudgetLenMismatch {
                got: self.turn.roll_budget.len(),
                expected: players,
            });
        }
        if self.turn.warmup_rolls_taken.len() != players {
            return Err(StateError::CounterLenMismatch {
                got: self.turn.warmup_rolls_taken.len(),
                expected: players,
            });
        }

        let mut seen = std::collections::HashSet::new();
        for player in self.roster.players() {
            for gift in &player.gifts {
                if !seen.insert(gift.id) {
                    return Err(StateError::DuplicateGiftId(gift.id.0));
                }
            }
        }

        Ok(())
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::with_seed(0)
    }
}
