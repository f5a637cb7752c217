//! Turn engine.
//!
//! [`GameEngine`] is the only writer of [`SessionState`]. It borrows the
//! state mutably for the duration of each call, so two engines can never
//! mutate one session concurrently. Rolls are two-phase: [`prepare_roll`]
//! draws the face and every target eagerly and marks the roll in flight,
//! [`commit_roll`] applies the resolution. A host that animates the reveal
//! holds the prepared roll while the animation plays; hosts that don't use
//! [`roll`], which does both steps back to back.
//!
//! [`prepare_roll`]: GameEngine::prepare_roll
//! [`commit_roll`]: GameEngine::commit_roll
//! [`roll`]: GameEngine::roll

mod errors;

pub use errors::{RollError, SetupError};

use crate::config::GameConfig;
use crate::env::{GameEnv, RngOracle, context};
use crate::resolve::{
    EndgameOptions, WarmupTargets, choose_endgame_options, choose_warmup_targets, resolve_endgame,
    resolve_warmup,
};
use crate::select::select_weighted;
use crate::state::types::{
    EndgameAction, Face, GameLog, GiftIdAllocator, LogEvent, Narrative, Phase, Player, PlayerId,
    RollOutcome, Roster, WarmupAction,
};
use crate::state::{SessionState, SetupState, TurnState};
use crate::tables::ActionTable;

/// A face drawn and fully targeted, awaiting its commit.
///
/// Holding one of these keeps `roll_in_flight` set on the session, so a
/// second prepare is rejected until this one is committed. Committing
/// requires the flag to still be set, so a stale prepared roll (after a
/// reset, or one already committed) cannot be applied.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedRoll {
    pub face: Face,
    pub phase: Phase,
    plan: RollPlan,
    counted: bool,
}

impl PreparedRoll {
    /// The pre-drawn targets, for hosts that reveal them before committing.
    pub fn plan(&self) -> &RollPlan {
        &self.plan
    }
}

/// Phase-specific pre-drawn targets of a prepared roll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RollPlan {
    Warmup(WarmupTargets),
    Endgame(EndgameOptions),
}

/// What one committed roll did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollReport {
    pub outcome: RollOutcome,
    pub narrative: Option<Narrative>,
    /// Set when this roll ended its phase.
    pub entered_phase: Option<Phase>,
}

/// Mutating interface over one game session.
pub struct GameEngine<'a> {
    state: &'a mut SessionState,
    rng: &'a dyn RngOracle,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut SessionState, rng: &'a dyn RngOracle) -> Self {
        Self { state, rng }
    }

    /// Starts a fresh game from the given setup, replacing any prior game
    /// in this session.
    pub fn start_game(&mut self, names: Vec<String>, pile_size: u32) -> Result<(), SetupError> {
        if names.len() < GameConfig::MIN_PLAYERS {
            return Err(SetupError::TooFewPlayers {
                got: names.len(),
                min: GameConfig::MIN_PLAYERS,
            });
        }
        if pile_size == 0 {
            return Err(SetupError::ZeroPileSize);
        }

        let players = names
            .iter()
            .enumerate()
            .map(|(seat, name)| Player::new(PlayerId(seat as u32), name.clone()))
            .collect();

        self.state.setup = SetupState { names, pile_size };
        self.state.roster = Roster::new(players);
        self.state.pile = pile_size;
        self.state.turn =
            TurnState::for_players(self.state.roster.len(), self.state.config.warmup_rolls);
        self.state.log = GameLog::new();
        self.state.last_outcome = None;
        *self.state.gift_ids_mut() = GiftIdAllocator::new();
        self.state.phase = Phase::Warmup;
        Ok(())
    }

    /// Validates the roll, draws the face and its targets, and marks the
    /// roll in flight. No session state changes besides the in-flight flag.
    ///
    /// `override_budget` bypasses the budget gate and makes the roll
    /// uncounted (no decrement, no rolls-taken increment); a forced face
    /// must still be eligible.
    pub fn prepare_roll(
        &mut self,
        forced: Option<Face>,
        override_budget: bool,
    ) -> Result<PreparedRoll, RollError> {
        let phase = self.state.phase;
        if !phase.accepts_rolls() {
            return Err(RollError::WrongPhase(phase));
        }
        if self.state.turn.roll_in_flight {
            return Err(RollError::RollInFlight);
        }
        let actor = self.state.turn.current_player;
        if !override_budget && self.state.turn.roll_budget[actor] == 0 {
            return Err(RollError::BudgetExhausted { player: actor });
        }

        let table = ActionTable::for_phase(phase);
        let roster = &self.state.roster;
        let pile = self.state.pile;
        let env = self.env();

        let face = match forced {
            Some(face) => {
                if !table.entry(face).is_available(actor, roster, pile) {
                    return Err(RollError::IneligibleFace { face: face.value() });
                }
                face
            }
            None => {
                let eligible = table.available_faces(actor, roster, pile);
                let has_gifts = roster.players()[actor].has_gifts();
                let picked = select_weighted(&env, context::FACE, &eligible, |&face| {
                    face_weight(phase, face, has_gifts, pile)
                })
                .ok_or(RollError::NoEligibleFace)?;
                eligible[picked]
            }
        };

        let plan = match phase {
            Phase::Endgame => RollPlan::Endgame(choose_endgame_options(face, roster, actor, &env)),
            _ => RollPlan::Warmup(choose_warmup_targets(face, roster, actor, &env)),
        };

        self.state.turn.roll_in_flight = true;
        Ok(PreparedRoll {
            face,
            phase,
            plan,
            counted: !override_budget,
        })
    }

    /// Applies a prepared roll: resolves the action, updates budgets and
    /// counters, runs phase transitions, and advances the turn.
    ///
    /// Rejected when no roll is in flight, which covers both committing
    /// twice and committing across a reset.
    pub fn commit_roll(&mut self, prepared: PreparedRoll) -> Result<RollReport, RollError> {
        if !self.state.turn.roll_in_flight {
            return Err(RollError::NoRollInFlight);
        }
        let actor = self.state.turn.current_player;
        let env = self.env();
        let roster = self.state.roster.clone();
        let pile = self.state.pile;

        let resolution = match prepared.plan {
            RollPlan::Warmup(targets) => resolve_warmup(
                WarmupAction::for_face(prepared.face),
                &roster,
                pile,
                actor,
                &targets,
                self.state.gift_ids_mut(),
                &env,
            ),
            RollPlan::Endgame(options) => resolve_endgame(
                EndgameAction::for_face(prepared.face),
                &roster,
                pile,
                actor,
                &options,
                &env,
            ),
        };

        self.state.roster = resolution.roster;
        self.state.pile = resolution.pile;
        for event in resolution.log {
            self.state.log.push(event);
        }
        let outcome = RollOutcome {
            phase: prepared.phase,
            face: prepared.face,
        };
        self.state.last_outcome = Some(outcome);

        if prepared.counted {
            let budget = &mut self.state.turn.roll_budget[actor];
            *budget = budget.saturating_sub(1);
            if prepared.phase == Phase::Warmup {
                self.state.turn.warmup_rolls_taken[actor] += 1;
            }
        }

        let entered_phase = self.run_phase_transitions();
        self.advance_turn();
        self.state.nonce += 1;
        self.state.turn.roll_in_flight = false;

        Ok(RollReport {
            outcome,
            narrative: resolution.narrative,
            entered_phase,
        })
    }

    /// Prepare and commit in one synchronous step.
    pub fn roll(
        &mut self,
        forced: Option<Face>,
        override_budget: bool,
    ) -> Result<RollReport, RollError> {
        let prepared = self.prepare_roll(forced, override_budget)?;
        self.commit_roll(prepared)
    }

    /// Unconditional return to the initial setup state, discarding any
    /// in-flight roll. The seed survives.
    pub fn reset(&mut self) {
        *self.state = SessionState::with_seed(self.state.game_seed);
    }

    /// Debug escape hatch: jumps to an arbitrary phase with no checks,
    /// refreshing turn bookkeeping to match. Outside the guaranteed
    /// contract.
    pub fn force_phase(&mut self, phase: Phase) {
        self.state.turn.roll_in_flight = false;
        self.state.phase = phase;
        match phase {
            Phase::Warmup => {
                self.state.turn =
                    TurnState::for_players(self.state.roster.len(), self.state.config.warmup_rolls);
            }
            Phase::Endgame => {
                self.state.turn.refill_all(self.state.config.endgame_rolls);
            }
            Phase::Setup | Phase::Ended => {}
        }
    }

    /// Faces the current player may roll right now.
    pub fn available_faces(&self) -> Vec<Face> {
        ActionTable::for_phase(self.state.phase).available_faces(
            self.state.turn.current_player,
            &self.state.roster,
            self.state.pile,
        )
    }

    fn env(&self) -> GameEnv<'a> {
        GameEnv::new(self.rng, self.state.game_seed, self.state.nonce)
    }

    /// Runs when the total remaining budget hits 0.
    fn run_phase_transitions(&mut self) -> Option<Phase> {
        if self.state.turn.total_budget() > 0 {
            return None;
        }
        match self.state.phase {
            Phase::Warmup => {
                let min = self.state.config.warmup_rolls;
                let everyone_done = self
                    .state
                    .turn
                    .warmup_rolls_taken
                    .iter()
                    .all(|&taken| taken >= min);
                if self.state.pile == 0 && everyone_done {
                    self.state.phase = Phase::Endgame;
                    self.state
                        .turn
                        .refill_all(self.state.config.endgame_rolls);
                    self.state.log.push(LogEvent::EndgameBegins);
                    Some(Phase::Endgame)
                } else if self.state.pile > 0 {
                    // Mini-round: one more roll each until the pile drains.
                    for budget in &mut self.state.turn.roll_budget {
                        *budget += 1;
                    }
                    None
                } else {
                    // Pile is gone but stragglers are below the minimum:
                    // grant each seat its remaining shortfall.
                    for (budget, &taken) in self
                        .state
                        .turn
                        .roll_budget
                        .iter_mut()
                        .zip(&self.state.turn.warmup_rolls_taken)
                    {
                        *budget += min.saturating_sub(taken);
                    }
                    None
                }
            }
            Phase::Endgame => {
                self.state.phase = Phase::Ended;
                Some(Phase::Ended)
            }
            Phase::Setup | Phase::Ended => None,
        }
    }

    /// Next seat after the actor, cyclically, with budget remaining. Stays
    /// put when no seat qualifies (the session just ended).
    fn advance_turn(&mut self) {
        let len = self.state.roster.len();
        if len == 0 {
            return;
        }
        let start = self.state.turn.current_player;
        for step in 1..=len {
            let seat = (start + step) % len;
            if self.state.turn.roll_budget[seat] > 0 {
                self.state.turn.current_player = seat;
                return;
            }
        }
    }
}

/// Face bias for the weighted draw: warm-up grabs are favored while the
/// actor is empty-handed and the pile still has gifts; the endgame twist
/// is favored for empty-handed actors.
fn face_weight(phase: Phase, face: Face, actor_has_gifts: bool, pile: u32) -> usize {
    match phase {
        Phase::Warmup if matches!(face, Face::One | Face::Two) => {
            let mut weight = if face == Face::One && !actor_has_gifts {
                3
            } else {
                1
            };
            if pile > 0 {
                weight += 1;
            }
            weight
        }
        Phase::Endgame if face == Face::Six => {
            if actor_has_gifts {
                1
            } else {
                3
            }
        }
        _ => 1,
    }
}
