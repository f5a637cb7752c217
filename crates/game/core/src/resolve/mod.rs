//! Pure roll resolution.
//!
//! Resolvers never mutate their inputs: they take the roster and pile,
//! produce a new roster/pile plus structured log events and an optional
//! narrative descriptor. Randomness is drawn eagerly through [`GameEnv`];
//! callers that animate a target reveal pre-draw the target with
//! [`choose_warmup_targets`] / [`choose_endgame_options`] and pass it back
//! in so the reveal replays the already-known result instead of rolling
//! twice.
mod endgame;
mod warmup;

pub use endgame::resolve_endgame;
pub use warmup::resolve_warmup;

use crate::env::{GameEnv, context};
use crate::select::select_weighted;
use crate::state::types::{Direction, EndgameAction, Face, LogEvent, Narrative, Roster, WarmupAction};

/// Outcome of one resolved action.
#[derive(Clone, Debug)]
pub struct Resolution {
    pub roster: Roster,
    pub pile: u32,
    pub log: Vec<LogEvent>,
    pub narrative: Option<Narrative>,
}

impl Resolution {
    fn unchanged(roster: &Roster, pile: u32, event: LogEvent) -> Self {
        Self {
            roster: roster.clone(),
            pile,
            log: vec![event],
            narrative: None,
        }
    }
}

/// Pre-selected warm-up targets (seat indices).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WarmupTargets {
    /// Recipient for Forced Tribute (face 3).
    pub tribute_target: Option<usize>,
    /// Victim for Grinch Tax (face 4).
    pub tax_target: Option<usize>,
}

/// Pre-selected endgame targets and direction (seat indices).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EndgameOptions {
    pub flip_target: Option<usize>,
    pub trash_target: Option<usize>,
    pub joker_pair: Option<(usize, usize)>,
    pub santa_target: Option<usize>,
    pub direction: Option<Direction>,
}

/// Eagerly draws the targets a warm-up face will need.
///
/// Uses the same weights as the resolver's own fallback, so resolving with
/// these targets equals resolving without them under the same seed.
pub fn choose_warmup_targets(
    face: Face,
    roster: &Roster,
    actor: usize,
    env: &GameEnv<'_>,
) -> WarmupTargets {
    let mut targets = WarmupTargets::default();
    match WarmupAction::for_face(face) {
        WarmupAction::ForcedTribute => {
            targets.tribute_target = pick_tribute_target(roster, actor, env);
        }
        WarmupAction::GrinchTax => {
            targets.tax_target = pick_tax_target(roster, actor, env);
        }
        _ => {}
    }
    targets
}

/// Eagerly draws the targets/direction an endgame face will need.
pub fn choose_endgame_options(
    face: Face,
    roster: &Roster,
    actor: usize,
    env: &GameEnv<'_>,
) -> EndgameOptions {
    let mut options = EndgameOptions::default();
    match EndgameAction::for_face(face) {
        EndgameAction::FullFlip => {
            options.flip_target = pick_flip_target(roster, actor, env);
        }
        EndgameAction::TrashTrade => {
            options.trash_target = pick_trash_target(roster, actor, env);
        }
        EndgameAction::JokerSwap => {
            options.joker_pair = pick_joker_pair(roster, env);
        }
        EndgameAction::SantasHand => {
            options.santa_target = pick_santa_target(roster, actor, env);
        }
        EndgameAction::TwistOfFate => {
            options.direction = Some(pick_direction(env));
        }
        EndgameAction::IceLock => {}
    }
    options
}

// ===== shared target draws =====
// The resolvers call these as fallback when no pre-selected target was
// supplied, so both code paths share one weighting definition.

pub(crate) fn pick_tribute_target(
    roster: &Roster,
    actor: usize,
    env: &GameEnv<'_>,
) -> Option<usize> {
    // Any other player; holders of many gifts attract more.
    let candidates = roster.others(actor);
    let picked = select_weighted(env, context::PRIMARY_TARGET, &candidates, |&i| {
        roster.players()[i].gift_count() + 1
    })?;
    Some(candidates[picked])
}

pub(crate) fn pick_tax_target(roster: &Roster, actor: usize, env: &GameEnv<'_>) -> Option<usize> {
    let candidates = roster.others_with_unlocked(actor);
    let picked = select_weighted(env, context::PRIMARY_TARGET, &candidates, |&i| {
        roster.players()[i].gift_count() + 1
    })?;
    Some(candidates[picked])
}

pub(crate) fn pick_flip_target(roster: &Roster, actor: usize, env: &GameEnv<'_>) -> Option<usize> {
    let candidates = roster.others_with_unlocked(actor);
    let picked = select_weighted(env, context::PRIMARY_TARGET, &candidates, |&i| {
        roster.players()[i].unlocked_count() + 1
    })?;
    Some(candidates[picked])
}

pub(crate) fn pick_trash_target(roster: &Roster, actor: usize, env: &GameEnv<'_>) -> Option<usize> {
    let candidates = roster.others(actor);
    let picked = select_weighted(env, context::PRIMARY_TARGET, &candidates, |&i| {
        roster.players()[i].unlocked_count() + 1
    })?;
    Some(candidates[picked])
}

pub(crate) fn pick_santa_target(roster: &Roster, actor: usize, env: &GameEnv<'_>) -> Option<usize> {
    let candidates = roster.others(actor);
    let picked = select_weighted(env, context::PRIMARY_TARGET, &candidates, |&i| {
        roster.players()[i].gift_count() + 1
    })?;
    Some(candidates[picked])
}

/// Two distinct players: the first weighted over everyone, the second over
/// the remainder, both by total gift count + 1.
pub(crate) fn pick_joker_pair(roster: &Roster, env: &GameEnv<'_>) -> Option<(usize, usize)> {
    if roster.len() < 2 {
        return None;
    }
    let all: Vec<usize> = (0..roster.len()).collect();
    let first_pos = select_weighted(env, context::PRIMARY_TARGET, &all, |&i| {
        roster.players()[i].gift_count() + 1
    })?;
    let first = all[first_pos];

    let rest: Vec<usize> = all.into_iter().filter(|&i| i != first).collect();
    let second_pos = select_weighted(env, context::SECONDARY_TARGET, &rest, |&i| {
        roster.players()[i].gift_count() + 1
    })?;
    Some((first, rest[second_pos]))
}

pub(crate) fn pick_direction(env: &GameEnv<'_>) -> Direction {
    if env.coin_flip(context::DIRECTION) {
        Direction::Right
    } else {
        Direction::Left
    }
}
