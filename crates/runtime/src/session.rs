//! The session facade.

use game_core::{
    ActionTable, Face, GameEngine, Phase, PreparedRoll, RngOracle, RollReport, SessionState,
    SplitMixOracle,
};

use crate::config::SessionConfig;
use crate::error::{Result, RuntimeError};
use crate::repository::{FileSnapshotRepository, RepositoryError, SnapshotRepository};

/// Sole writer of one game session.
///
/// Wraps the pure engine with the RNG oracle, optional snapshot
/// persistence, and the two-phase roll contract: [`begin_roll`] draws the
/// outcome and holds it while the host animates, [`commit_roll`] applies
/// it. A second `begin_roll` while one is pending is rejected, not queued.
///
/// [`begin_roll`]: GameSession::begin_roll
/// [`commit_roll`]: GameSession::commit_roll
pub struct GameSession {
    state: SessionState,
    rng: Box<dyn RngOracle>,
    repository: Option<Box<dyn SnapshotRepository>>,
    autosave: bool,
    pending: Option<PreparedRoll>,
}

impl GameSession {
    /// Session with file persistence per the config.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let seed = config.forced_seed.unwrap_or_else(rand::random);
        let repository = FileSnapshotRepository::new(config.snapshot_path)?;
        Ok(Self::with_repository(
            seed,
            Box::new(repository),
            config.autosave,
        ))
    }

    /// Session without persistence.
    pub fn in_memory(seed: u64) -> Self {
        Self {
            state: SessionState::with_seed(seed),
            rng: Box::new(SplitMixOracle),
            repository: None,
            autosave: false,
            pending: None,
        }
    }

    pub fn with_repository(
        seed: u64,
        repository: Box<dyn SnapshotRepository>,
        autosave: bool,
    ) -> Self {
        Self {
            state: SessionState::with_seed(seed),
            rng: Box::new(SplitMixOracle),
            repository: Some(repository),
            autosave,
            pending: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Faces the current player may roll right now.
    pub fn available_faces(&self) -> Vec<Face> {
        ActionTable::for_phase(self.state.phase).available_faces(
            self.state.turn.current_player,
            &self.state.roster,
            self.state.pile,
        )
    }

    pub fn start_game(&mut self, names: Vec<String>, pile_size: u32) -> Result<()> {
        self.pending = None;
        let players = names.len();
        GameEngine::new(&mut self.state, self.rng.as_ref()).start_game(names, pile_size)?;
        tracing::info!(players, pile = pile_size, "game started");
        self.autosave()
    }

    /// Draws the face and targets of the next roll and holds them for the
    /// host's reveal. The draw is final; committing replays it.
    pub fn begin_roll(
        &mut self,
        forced: Option<Face>,
        override_budget: bool,
    ) -> Result<&PreparedRoll> {
        let prepared = GameEngine::new(&mut self.state, self.rng.as_ref())
            .prepare_roll(forced, override_budget)?;
        Ok(self.pending.insert(prepared))
    }

    /// Applies the pending roll.
    pub fn commit_roll(&mut self) -> Result<RollReport> {
        let prepared = self.pending.take().ok_or(RuntimeError::NoPreparedRoll)?;
        let report = GameEngine::new(&mut self.state, self.rng.as_ref()).commit_roll(prepared)?;

        if let Some(phase) = report.entered_phase {
            tracing::info!(%phase, "phase transition");
        }
        tracing::debug!(
            face = report.outcome.face.value(),
            phase = %report.outcome.phase,
            "roll committed"
        );

        self.autosave()?;
        Ok(report)
    }

    /// Begin and commit in one step, for hosts without a reveal animation.
    pub fn roll(&mut self, forced: Option<Face>, override_budget: bool) -> Result<RollReport> {
        self.begin_roll(forced, override_budget)?;
        self.commit_roll()
    }

    /// Unconditional return to setup, discarding any pending roll.
    pub fn reset(&mut self) -> Result<()> {
        self.pending = None;
        GameEngine::new(&mut self.state, self.rng.as_ref()).reset();
        tracing::info!("session reset");
        self.autosave()
    }

    /// Debug phase jump, outside the guaranteed contract.
    pub fn force_phase(&mut self, phase: Phase) -> Result<()> {
        self.pending = None;
        GameEngine::new(&mut self.state, self.rng.as_ref()).force_phase(phase);
        tracing::warn!(%phase, "phase forced");
        self.autosave()
    }

    /// Persists the current state through the configured repository.
    pub fn save(&self) -> Result<()> {
        let repository = self.repository.as_ref().ok_or(RuntimeError::NoRepository)?;
        repository.save(&self.state)?;
        Ok(())
    }

    /// Loads the persisted snapshot, replacing the current state.
    ///
    /// Returns `false` when no snapshot exists or the stored one is
    /// corrupt; a corrupt snapshot logs a warning and leaves the session
    /// on a fresh setup state instead of crashing.
    pub fn restore(&mut self) -> Result<bool> {
        let repository = self.repository.as_ref().ok_or(RuntimeError::NoRepository)?;
        match repository.load() {
            Ok(Some(state)) => {
                self.state = state;
                self.pending = None;
                tracing::info!(phase = %self.state.phase, "session restored");
                Ok(true)
            }
            Ok(None) => Ok(false),
            Err(RepositoryError::CorruptSnapshot(reason)) => {
                tracing::warn!(%reason, "snapshot corrupt, starting from a fresh setup");
                self.state = SessionState::with_seed(self.state.game_seed);
                self.pending = None;
                Ok(false)
            }
            Err(other) => Err(other.into()),
        }
    }

    fn autosave(&self) -> Result<()> {
        if self.autosave
            && let Some(repository) = &self.repository
        {
            repository.save(&self.state)?;
        }
        Ok(())
    }
}
