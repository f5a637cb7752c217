//! Endgame phase action resolution.

use crate::env::{GameEnv, context};
use crate::state::types::{Direction, EndgameAction, LogEvent, Narrative, Roster};

use super::{
    EndgameOptions, Resolution, pick_direction, pick_flip_target, pick_joker_pair,
    pick_santa_target, pick_trash_target,
};

/// Resolves one endgame action.
///
/// Pre-selected targets/direction in `options` take precedence over the
/// resolver's own draws, so an externally animated reveal and the final
/// state come from the same single draw.
pub fn resolve_endgame(
    action: EndgameAction,
    roster: &Roster,
    pile: u32,
    actor: usize,
    options: &EndgameOptions,
    env: &GameEnv<'_>,
) -> Resolution {
    match action {
        EndgameAction::IceLock => ice_lock(roster, pile, actor, env),
        EndgameAction::FullFlip => full_flip(roster, pile, actor, options.flip_target, env),
        EndgameAction::TrashTrade => trash_trade(roster, pile, actor, options.trash_target, env),
        EndgameAction::JokerSwap => joker_swap(roster, pile, options.joker_pair, env),
        EndgameAction::SantasHand => santas_hand(roster, pile, actor, options.santa_target, env),
        EndgameAction::TwistOfFate => twist_of_fate(roster, pile, options.direction, env),
    }
}

/// Face 1: freeze one uniformly-chosen unlocked gift of the actor.
/// Locking is one-way; nothing ever clears the flag again.
fn ice_lock(roster: &Roster, pile: u32, actor: usize, env: &GameEnv<'_>) -> Resolution {
    let actor_name = roster.players()[actor].name.clone();
    let unlocked = roster.players()[actor].unlocked_indices();
    if unlocked.is_empty() {
        return Resolution::unchanged(
            roster,
            pile,
            LogEvent::NothingToFreeze { actor: actor_name },
        );
    }

    let pick = unlocked[env.pick_index(context::PRIMARY_GIFT, unlocked.len())];
    let mut next = roster.clone();
    next.get_mut(actor).expect("actor index in range").gifts[pick].locked = true;

    Resolution {
        roster: next,
        pile,
        log: vec![LogEvent::GiftFrozen {
            actor: actor_name.clone(),
        }],
        narrative: Some(Narrative::Freeze { actor: actor_name }),
    }
}

/// Face 2: swap the unlocked partitions of actor and target; locked gifts
/// never move.
fn full_flip(
    roster: &Roster,
    pile: u32,
    actor: usize,
    preselected: Option<usize>,
    env: &GameEnv<'_>,
) -> Resolution {
    let actor_name = roster.players()[actor].name.clone();
    let Some(target) = preselected.or_else(|| pick_flip_target(roster, actor, env)) else {
        return Resolution::unchanged(roster, pile, LogEvent::NoSwapTarget { actor: actor_name });
    };

    let mut next = roster.clone();
    swap_unlocked(&mut next, actor, target);
    let target_name = next.players()[target].name.clone();

    Resolution {
        roster: next,
        pile,
        log: vec![LogEvent::UnlockedSwapped {
            actor: actor_name.clone(),
            target: target_name.clone(),
        }],
        narrative: Some(Narrative::Flip {
            actor: actor_name,
            target: target_name,
        }),
    }
}

/// Face 3: like Full Flip, except a target with no unlocked gifts receives
/// one random unlocked gift from the actor with nothing in return.
fn trash_trade(
    roster: &Roster,
    pile: u32,
    actor: usize,
    preselected: Option<usize>,
    env: &GameEnv<'_>,
) -> Resolution {
    let actor_name = roster.players()[actor].name.clone();
    if !roster.players()[actor].has_unlocked() {
        return Resolution::unchanged(roster, pile, LogEvent::TrashMissingUnlocked);
    }
    let Some(target) = preselected.or_else(|| pick_trash_target(roster, actor, env)) else {
        return Resolution::unchanged(roster, pile, LogEvent::TrashNoTarget);
    };

    let mut next = roster.clone();
    if next.players()[target].has_unlocked() {
        swap_unlocked(&mut next, actor, target);
    } else {
        // Asymmetric fallback: the actor hands one random unlocked gift
        // over unconditionally.
        let unlocked = next.players()[actor].unlocked_indices();
        let pick = unlocked[env.pick_index(context::PRIMARY_GIFT, unlocked.len())];
        let gift = next.get_mut(actor).expect("actor index in range").gifts.remove(pick);
        next.get_mut(target).expect("target index in range").gifts.push(gift);
    }
    let target_name = next.players()[target].name.clone();

    Resolution {
        roster: next,
        pile,
        log: vec![LogEvent::TrashTraded {
            actor: actor_name.clone(),
            target: target_name.clone(),
        }],
        narrative: Some(Narrative::TrashTrade {
            actor: actor_name,
            target: target_name,
        }),
    }
}

/// Face 4: two distinct weighted-random players exchange one
/// independently-drawn unlocked gift each; one-directional when only one
/// side has anything unlocked.
fn joker_swap(
    roster: &Roster,
    pile: u32,
    preselected: Option<(usize, usize)>,
    env: &GameEnv<'_>,
) -> Resolution {
    if roster.len() < 2 {
        return Resolution::unchanged(roster, pile, LogEvent::JokerNotEnoughPlayers);
    }
    let Some((first, second)) = preselected.or_else(|| pick_joker_pair(roster, env)) else {
        return Resolution::unchanged(roster, pile, LogEvent::JokerNotEnoughPlayers);
    };

    let first_unlocked = roster.players()[first].unlocked_indices();
    let second_unlocked = roster.players()[second].unlocked_indices();
    if first_unlocked.is_empty() && second_unlocked.is_empty() {
        return Resolution::unchanged(roster, pile, LogEvent::JokerMissingUnlocked);
    }

    let mut next = roster.clone();

    // Each side's pick is an independent uniform draw over its own
    // unlocked gifts, not a paired exchange of one conceptual gift.
    let first_pick = (!first_unlocked.is_empty())
        .then(|| first_unlocked[env.pick_index(context::PRIMARY_GIFT, first_unlocked.len())]);
    let second_pick = (!second_unlocked.is_empty())
        .then(|| second_unlocked[env.pick_index(context::SECONDARY_GIFT, second_unlocked.len())]);

    // Remove both before pushing so the picked indices stay valid.
    let first_gift = first_pick
        .map(|idx| next.get_mut(first).expect("first index in range").gifts.remove(idx));
    let second_gift = second_pick
        .map(|idx| next.get_mut(second).expect("second index in range").gifts.remove(idx));

    if let Some(gift) = first_gift {
        next.get_mut(second).expect("second index in range").gifts.push(gift);
    }
    if let Some(gift) = second_gift {
        next.get_mut(first).expect("first index in range").gifts.push(gift);
    }

    let first_name = next.players()[first].name.clone();
    let second_name = next.players()[second].name.clone();

    Resolution {
        roster: next,
        pile,
        log: vec![LogEvent::JokerSwapped {
            first: first_name.clone(),
            second: second_name.clone(),
        }],
        narrative: Some(Narrative::JokerSwap {
            first: first_name,
            second: second_name,
        }),
    }
}

/// Face 5: the actor's first unlocked gift goes to a weighted-random other
/// player.
fn santas_hand(
    roster: &Roster,
    pile: u32,
    actor: usize,
    preselected: Option<usize>,
    env: &GameEnv<'_>,
) -> Resolution {
    let actor_name = roster.players()[actor].name.clone();
    let target = preselected.or_else(|| pick_santa_target(roster, actor, env));
    let give_idx = roster.players()[actor].first_unlocked();
    let (Some(target), Some(give_idx)) = (target, give_idx) else {
        return Resolution::unchanged(
            roster,
            pile,
            LogEvent::SantaNothingToGive { actor: actor_name },
        );
    };

    let mut next = roster.clone();
    let gift = next.get_mut(actor).expect("actor index in range").gifts.remove(give_idx);
    let recipient = next.get_mut(target).expect("target index in range");
    recipient.gifts.push(gift);
    let target_name = recipient.name.clone();

    Resolution {
        roster: next,
        pile,
        log: vec![LogEvent::SantaGave {
            actor: actor_name.clone(),
            target: target_name.clone(),
        }],
        narrative: Some(Narrative::SantasHand {
            actor: actor_name,
            target: target_name,
        }),
    }
}

/// Face 6: every unlocked partition rotates one seat in a random
/// direction; locked gifts stay with their owner.
fn twist_of_fate(
    roster: &Roster,
    pile: u32,
    forced: Option<Direction>,
    env: &GameEnv<'_>,
) -> Resolution {
    let direction = forced.unwrap_or_else(|| pick_direction(env));

    // Snapshot all unlocked pools first: the rotation is simultaneous
    // across the whole roster, not a sequential per-player pass.
    let mut next = roster.clone();
    let mut pools: Vec<_> = (0..next.len())
        .map(|seat| next.get_mut(seat).expect("seat in range").extract_unlocked())
        .collect();

    for seat in 0..next.len() {
        let from = match direction {
            // Moving right means each pool arrives from the left neighbor.
            Direction::Right => next.left_of(seat),
            Direction::Left => next.right_of(seat),
        };
        let incoming = std::mem::take(&mut pools[from]);
        next.get_mut(seat).expect("seat in range").gifts.extend(incoming);
    }

    Resolution {
        roster: next,
        pile,
        log: vec![LogEvent::TwistRotated { direction }],
        narrative: Some(Narrative::TwistOfFate { direction }),
    }
}

/// Swaps the unlocked partitions of two seats; locked partitions keep
/// their position at the front of each list.
fn swap_unlocked(roster: &mut Roster, a: usize, b: usize) {
    let a_unlocked = roster.get_mut(a).expect("seat in range").extract_unlocked();
    let b_unlocked = roster.get_mut(b).expect("seat in range").extract_unlocked();
    roster.get_mut(a).expect("seat in range").gifts.extend(b_unlocked);
    roster.get_mut(b).expect("seat in range").gifts.extend(a_unlocked);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SplitMixOracle;
    use crate::state::types::{Gift, GiftId, Player, PlayerId};

    static ORACLE: SplitMixOracle = SplitMixOracle;

    fn env(nonce: u64) -> GameEnv<'static> {
        GameEnv::new(&ORACLE, 7, nonce)
    }

    fn player(idx: u32, gifts: &[(u64, bool)]) -> Player {
        let mut p = Player::new(PlayerId(idx), format!("p{idx}"));
        for &(id, locked) in gifts {
            p.gifts.push(Gift {
                id: GiftId(id),
                locked,
            });
        }
        p
    }

    fn ids(roster: &Roster, seat: usize) -> Vec<GiftId> {
        roster.players()[seat].gifts.iter().map(|g| g.id).collect()
    }

    #[test]
    fn ice_lock_freezes_exactly_one_gift() {
        let roster = Roster::new(vec![player(0, &[(0, false), (1, false)]), player(1, &[])]);

        let res = resolve_endgame(
            EndgameAction::IceLock,
            &roster,
            0,
            0,
            &EndgameOptions::default(),
            &env(0),
        );

        let locked: Vec<_> = res.roster.players()[0]
            .gifts
            .iter()
            .filter(|g| g.locked)
            .collect();
        assert_eq!(locked.len(), 1);
        assert_eq!(res.roster.players()[0].gift_count(), 2);
    }

    #[test]
    fn ice_lock_without_unlocked_gifts_is_a_noop() {
        let roster = Roster::new(vec![player(0, &[(0, true)]), player(1, &[(1, false)])]);

        let res = resolve_endgame(
            EndgameAction::IceLock,
            &roster,
            0,
            0,
            &EndgameOptions::default(),
            &env(0),
        );

        assert_eq!(&res.roster, &roster);
        assert_eq!(
            res.log,
            vec![LogEvent::NothingToFreeze { actor: "p0".into() }]
        );
    }

    #[test]
    fn full_flip_swaps_unlocked_partitions_only() {
        // Actor: [unlocked#0, locked#1], target: [unlocked#2].
        let roster = Roster::new(vec![
            player(0, &[(0, false), (1, true)]),
            player(1, &[(2, false)]),
        ]);
        let options = EndgameOptions {
            flip_target: Some(1),
            ..Default::default()
        };

        let res = resolve_endgame(EndgameAction::FullFlip, &roster, 0, 0, &options, &env(0));

        assert_eq!(ids(&res.roster, 0), vec![GiftId(1), GiftId(2)]);
        assert_eq!(ids(&res.roster, 1), vec![GiftId(0)]);
        assert!(res.roster.players()[0].gifts[0].locked);
    }

    #[test]
    fn full_flip_with_no_eligible_target_is_a_noop() {
        let roster = Roster::new(vec![player(0, &[(0, false)]), player(1, &[(1, true)])]);

        let res = resolve_endgame(
            EndgameAction::FullFlip,
            &roster,
            0,
            0,
            &EndgameOptions::default(),
            &env(0),
        );

        assert_eq!(&res.roster, &roster);
        assert_eq!(res.log, vec![LogEvent::NoSwapTarget { actor: "p0".into() }]);
    }

    #[test]
    fn trash_trade_fallback_is_one_directional() {
        // Target holds only locked gifts: the actor's single unlocked gift
        // moves over, nothing comes back.
        let roster = Roster::new(vec![
            player(0, &[(0, false)]),
            player(1, &[(1, true), (2, true)]),
        ]);
        let options = EndgameOptions {
            trash_target: Some(1),
            ..Default::default()
        };

        let res = resolve_endgame(EndgameAction::TrashTrade, &roster, 0, 0, &options, &env(0));

        assert_eq!(res.roster.players()[0].gift_count(), 0);
        assert_eq!(res.roster.players()[1].gift_count(), 3);
        assert_eq!(
            res.log,
            vec![LogEvent::TrashTraded {
                actor: "p0".into(),
                target: "p1".into()
            }]
        );
    }

    #[test]
    fn trash_trade_with_mutual_unlocked_swaps_partitions() {
        let roster = Roster::new(vec![
            player(0, &[(0, false), (1, true)]),
            player(1, &[(2, false), (3, false)]),
        ]);
        let options = EndgameOptions {
            trash_target: Some(1),
            ..Default::default()
        };

        let res = resolve_endgame(EndgameAction::TrashTrade, &roster, 0, 0, &options, &env(0));

        assert_eq!(ids(&res.roster, 0), vec![GiftId(1), GiftId(2), GiftId(3)]);
        assert_eq!(ids(&res.roster, 1), vec![GiftId(0)]);
    }

    #[test]
    fn trash_trade_requires_actor_unlocked() {
        let roster = Roster::new(vec![player(0, &[(0, true)]), player(1, &[(1, false)])]);

        let res = resolve_endgame(
            EndgameAction::TrashTrade,
            &roster,
            0,
            0,
            &EndgameOptions::default(),
            &env(0),
        );

        assert_eq!(&res.roster, &roster);
        assert_eq!(res.log, vec![LogEvent::TrashMissingUnlocked]);
    }

    #[test]
    fn joker_swap_exchanges_one_gift_each_way() {
        let roster = Roster::new(vec![
            player(0, &[(0, false)]),
            player(1, &[(1, false)]),
            player(2, &[]),
        ]);
        let options = EndgameOptions {
            joker_pair: Some((0, 1)),
            ..Default::default()
        };

        let res = resolve_endgame(EndgameAction::JokerSwap, &roster, 0, 2, &options, &env(0));

        assert_eq!(ids(&res.roster, 0), vec![GiftId(1)]);
        assert_eq!(ids(&res.roster, 1), vec![GiftId(0)]);
    }

    #[test]
    fn joker_swap_is_one_directional_when_one_side_is_locked_out() {
        let roster = Roster::new(vec![
            player(0, &[(0, false), (1, false)]),
            player(1, &[(2, true)]),
        ]);
        let options = EndgameOptions {
            joker_pair: Some((0, 1)),
            ..Default::default()
        };

        let res = resolve_endgame(EndgameAction::JokerSwap, &roster, 0, 0, &options, &env(0));

        assert_eq!(res.roster.players()[0].gift_count(), 1);
        assert_eq!(res.roster.players()[1].gift_count(), 2);
        // The locked gift never moved.
        assert!(res.roster.players()[1].gifts.iter().any(|g| g.id == GiftId(2) && g.locked));
    }

    #[test]
    fn joker_swap_with_no_unlocked_anywhere_is_a_noop() {
        let roster = Roster::new(vec![player(0, &[(0, true)]), player(1, &[(1, true)])]);
        let options = EndgameOptions {
            joker_pair: Some((0, 1)),
            ..Default::default()
        };

        let res = resolve_endgame(EndgameAction::JokerSwap, &roster, 0, 0, &options, &env(0));

        assert_eq!(&res.roster, &roster);
        assert_eq!(res.log, vec![LogEvent::JokerMissingUnlocked]);
    }

    #[test]
    fn santas_hand_gives_first_unlocked_away() {
        let roster = Roster::new(vec![
            player(0, &[(0, true), (1, false), (2, false)]),
            player(1, &[]),
        ]);
        let options = EndgameOptions {
            santa_target: Some(1),
            ..Default::default()
        };

        let res = resolve_endgame(EndgameAction::SantasHand, &roster, 0, 0, &options, &env(0));

        assert_eq!(ids(&res.roster, 1), vec![GiftId(1)]);
        assert_eq!(ids(&res.roster, 0), vec![GiftId(0), GiftId(2)]);
    }

    #[test]
    fn twist_right_rotates_unlocked_one_seat() {
        let roster = Roster::new(vec![
            player(0, &[(0, false)]),
            player(1, &[(1, false)]),
            player(2, &[(2, false)]),
        ]);
        let options = EndgameOptions {
            direction: Some(Direction::Right),
            ..Default::default()
        };

        let res = resolve_endgame(EndgameAction::TwistOfFate, &roster, 0, 0, &options, &env(0));

        assert_eq!(ids(&res.roster, 0), vec![GiftId(2)]);
        assert_eq!(ids(&res.roster, 1), vec![GiftId(0)]);
        assert_eq!(ids(&res.roster, 2), vec![GiftId(1)]);
    }

    #[test]
    fn twist_leaves_locked_gifts_in_place() {
        let roster = Roster::new(vec![
            player(0, &[(0, true), (1, false)]),
            player(1, &[(2, false)]),
            player(2, &[]),
        ]);
        let options = EndgameOptions {
            direction: Some(Direction::Left),
            ..Default::default()
        };

        let res = resolve_endgame(EndgameAction::TwistOfFate, &roster, 0, 0, &options, &env(0));

        // Locked gift 0 stays on seat 0; unlocked gifts rotated left.
        assert!(res.roster.players()[0].gifts.iter().any(|g| g.id == GiftId(0)));
        assert_eq!(ids(&res.roster, 0), vec![GiftId(0), GiftId(2)]);
        assert_eq!(ids(&res.roster, 2), vec![GiftId(1)]);
        assert!(res.roster.players()[1].gifts.is_empty());
    }
}
