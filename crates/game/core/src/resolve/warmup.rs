//! Warm-up phase action resolution.

use crate::env::GameEnv;
use crate::state::types::{
    Gift, GiftIdAllocator, LogEvent, Narrative, Roster, WarmupAction,
};

use super::{Resolution, WarmupTargets, pick_tax_target, pick_tribute_target};

/// Resolves one warm-up action.
///
/// Pure with respect to `roster`; the only out-of-band effect is drawing
/// fresh ids from `gift_ids` when the action takes gifts off the pile.
/// Pre-selected targets in `targets` take precedence over the resolver's
/// own weighted draw.
pub fn resolve_warmup(
    action: WarmupAction,
    roster: &Roster,
    pile: u32,
    actor: usize,
    targets: &WarmupTargets,
    gift_ids: &mut GiftIdAllocator,
    env: &GameEnv<'_>,
) -> Resolution {
    match action {
        WarmupAction::DoubleGrab => grab(roster, pile, actor, 2, gift_ids),
        WarmupAction::SingleGrab => grab(roster, pile, actor, 1, gift_ids),
        WarmupAction::ForcedTribute => tribute(roster, pile, actor, targets.tribute_target, env),
        WarmupAction::GrinchTax => tax(roster, pile, actor, targets.tax_target, env),
        WarmupAction::TinyTossRight => toss_right(roster, pile),
        WarmupAction::MegaMoveLeft => move_left(roster, pile),
    }
}

/// Faces 1 and 2: draw up to `count` gifts from the pile.
fn grab(
    roster: &Roster,
    pile: u32,
    actor: usize,
    count: u32,
    gift_ids: &mut GiftIdAllocator,
) -> Resolution {
    let take = count.min(pile);
    let mut next = roster.clone();
    let player = next.get_mut(actor).expect("actor index in range");
    for _ in 0..take {
        player.gifts.push(Gift::new(gift_ids.allocate()));
    }
    let actor_name = player.name.clone();

    Resolution {
        roster: next,
        pile: pile - take,
        log: vec![LogEvent::PileGrab {
            actor: actor_name.clone(),
            count: take,
        }],
        narrative: Some(Narrative::PileGrab {
            actor: actor_name,
            count: take,
        }),
    }
}

/// Face 3: actor's first unlocked gift goes to a weighted-random other
/// player.
fn tribute(
    roster: &Roster,
    pile: u32,
    actor: usize,
    preselected: Option<usize>,
    env: &GameEnv<'_>,
) -> Resolution {
    let actor_name = roster.players()[actor].name.clone();

    let Some(give_idx) = roster.players()[actor].first_unlocked() else {
        return Resolution::unchanged(roster, pile, LogEvent::NothingToGive { actor: actor_name });
    };
    let Some(target) = preselected.or_else(|| pick_tribute_target(roster, actor, env)) else {
        return Resolution::unchanged(roster, pile, LogEvent::NothingToGive { actor: actor_name });
    };

    let mut next = roster.clone();
    let gift = next.get_mut(actor).expect("actor index in range").gifts.remove(give_idx);
    let recipient = next.get_mut(target).expect("target index in range");
    recipient.gifts.push(gift);
    let target_name = recipient.name.clone();

    Resolution {
        roster: next,
        pile,
        log: vec![LogEvent::TributeGiven {
            actor: actor_name.clone(),
            target: target_name.clone(),
        }],
        narrative: Some(Narrative::Tribute {
            actor: actor_name,
            target: target_name,
        }),
    }
}

/// Face 4: steal the first unlocked gift from a weighted-random holder.
fn tax(
    roster: &Roster,
    pile: u32,
    actor: usize,
    preselected: Option<usize>,
    env: &GameEnv<'_>,
) -> Resolution {
    let Some(target) = preselected.or_else(|| pick_tax_target(roster, actor, env)) else {
        return Resolution::unchanged(roster, pile, LogEvent::NoUnlockedToSteal);
    };
    let Some(steal_idx) = roster.players()[target].first_unlocked() else {
        return Resolution::unchanged(roster, pile, LogEvent::NoUnlockedToSteal);
    };

    let mut next = roster.clone();
    let victim = next.get_mut(target).expect("target index in range");
    let target_name = victim.name.clone();
    let gift = victim.gifts.remove(steal_idx);
    let thief = next.get_mut(actor).expect("actor index in range");
    thief.gifts.push(gift);
    let actor_name = thief.name.clone();

    Resolution {
        roster: next,
        pile,
        log: vec![LogEvent::GiftStolen {
            actor: actor_name.clone(),
            target: target_name.clone(),
        }],
        narrative: Some(Narrative::Steal {
            actor: actor_name,
            target: target_name,
        }),
    }
}

/// Face 5: everyone's smallest unlocked gift moves one seat right,
/// simultaneously.
fn toss_right(roster: &Roster, pile: u32) -> Resolution {
    let next = pass_simultaneously(roster, PassKind::SmallestRight);
    Resolution {
        roster: next,
        pile,
        log: vec![LogEvent::TinyTossRight],
        narrative: Some(Narrative::TinyTossRight),
    }
}

/// Face 6: everyone's largest unlocked gift moves one seat left,
/// simultaneously.
fn move_left(roster: &Roster, pile: u32) -> Resolution {
    let next = pass_simultaneously(roster, PassKind::LargestLeft);
    Resolution {
        roster: next,
        pile,
        log: vec![LogEvent::MegaMoveLeft],
        narrative: Some(Narrative::MegaMoveLeft),
    }
}

enum PassKind {
    SmallestRight,
    LargestLeft,
}

/// Snapshot-based simultaneous pass: picks are taken from the roster as it
/// was before any move, so an incoming gift is never immediately re-sent
/// within the same resolution.
fn pass_simultaneously(roster: &Roster, kind: PassKind) -> Roster {
    let picks: Vec<_> = roster
        .players()
        .iter()
        .map(|p| {
            let idx = match kind {
                PassKind::SmallestRight => p.first_unlocked(),
                PassKind::LargestLeft => p.last_unlocked(),
            };
            idx.map(|i| p.gifts[i].id)
        })
        .collect();

    let mut next = roster.clone();
    for (seat, pick) in picks.into_iter().enumerate() {
        let Some(gift_id) = pick else { continue };
        let Some(gift) = next.get_mut(seat).expect("seat in range").remove_gift(gift_id) else {
            continue;
        };
        let to = match kind {
            PassKind::SmallestRight => next.right_of(seat),
            PassKind::LargestLeft => next.left_of(seat),
        };
        next.get_mut(to).expect("neighbor in range").gifts.push(gift);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SplitMixOracle;
    use crate::state::types::{GiftId, Player, PlayerId};

    static ORACLE: SplitMixOracle = SplitMixOracle;

    fn env(nonce: u64) -> GameEnv<'static> {
        GameEnv::new(&ORACLE, 99, nonce)
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

    fn gift_ids(seats: &[(u64, bool)]) -> GiftIdAllocator {
        // Start the allocator past any fixture ids.
        let mut alloc = GiftIdAllocator::new();
        for _ in 0..=seats.iter().map(|&(id, _)| id).max().unwrap_or(0) {
            alloc.allocate();
        }
        alloc
    }

    #[test]
    fn double_grab_takes_two_from_pile() {
        let roster = Roster::new(vec![player(0, &[]), player(1, &[])]);
        let mut alloc = GiftIdAllocator::new();

        let res = resolve_warmup(
            WarmupAction::DoubleGrab,
            &roster,
            4,
            0,
            &WarmupTargets::default(),
            &mut alloc,
            &env(0),
        );

        assert_eq!(res.pile, 2);
        assert_eq!(res.roster.players()[0].gift_count(), 2);
        assert!(res.roster.players()[0].gifts.iter().all(|g| !g.locked));
        assert_eq!(
            res.log,
            vec![LogEvent::PileGrab {
                actor: "p0".into(),
                count: 2
            }]
        );
    }

    #[test]
    fn single_grab_is_capped_by_pile() {
        let roster = Roster::new(vec![player(0, &[]), player(1, &[])]);
        let mut alloc = GiftIdAllocator::new();

        let res = resolve_warmup(
            WarmupAction::DoubleGrab,
            &roster,
            1,
            0,
            &WarmupTargets::default(),
            &mut alloc,
            &env(0),
        );

        assert_eq!(res.pile, 0);
        assert_eq!(res.roster.players()[0].gift_count(), 1);
    }

    #[test]
    fn tribute_moves_first_unlocked_to_preselected_target() {
        let fixtures = [(0, true), (1, false), (2, false)];
        let roster = Roster::new(vec![player(0, &fixtures), player(1, &[]), player(2, &[])]);
        let targets = WarmupTargets {
            tribute_target: Some(2),
            tax_target: None,
        };

        let res = resolve_warmup(
            WarmupAction::ForcedTribute,
            &roster,
            0,
            0,
            &targets,
            &mut gift_ids(&fixtures),
            &env(0),
        );

        // The locked gift stays, the first unlocked one (id 1) moved.
        assert_eq!(res.roster.players()[0].gift_count(), 2);
        assert_eq!(res.roster.players()[2].gifts[0].id, GiftId(1));
        assert!(matches!(res.narrative, Some(Narrative::Tribute { .. })));
    }

    #[test]
    fn tribute_without_unlocked_gift_is_a_noop() {
        let fixtures = [(0, true)];
        let roster = Roster::new(vec![player(0, &fixtures), player(1, &[])]);

        let res = resolve_warmup(
            WarmupAction::ForcedTribute,
            &roster,
            0,
            0,
            &WarmupTargets::default(),
            &mut gift_ids(&fixtures),
            &env(0),
        );

        assert_eq!(&res.roster, &roster);
        assert_eq!(
            res.log,
            vec![LogEvent::NothingToGive { actor: "p0".into() }]
        );
        assert!(res.narrative.is_none());
    }

    #[test]
    fn tax_steals_first_unlocked_from_target() {
        let roster = Roster::new(vec![
            player(0, &[]),
            player(1, &[(0, true), (1, false), (2, false)]),
        ]);
        let targets = WarmupTargets {
            tribute_target: None,
            tax_target: Some(1),
        };

        let res = resolve_warmup(
            WarmupAction::GrinchTax,
            &roster,
            0,
            0,
            &targets,
            &mut gift_ids(&[(2, false)]),
            &env(0),
        );

        assert_eq!(res.roster.players()[0].gifts[0].id, GiftId(1));
        assert_eq!(res.roster.players()[1].gift_count(), 2);
    }

    #[test]
    fn tax_with_no_unlocked_holders_is_a_noop() {
        let roster = Roster::new(vec![player(0, &[]), player(1, &[(0, true)])]);

        let res = resolve_warmup(
            WarmupAction::GrinchTax,
            &roster,
            0,
            0,
            &WarmupTargets::default(),
            &mut gift_ids(&[(0, true)]),
            &env(0),
        );

        assert_eq!(&res.roster, &roster);
        assert_eq!(res.log, vec![LogEvent::NoUnlockedToSteal]);
    }

    #[test]
    fn tiny_toss_moves_smallest_gifts_right_simultaneously() {
        // Three seats, each with one unlocked gift: a full circular shift.
        let roster = Roster::new(vec![
            player(0, &[(0, false)]),
            player(1, &[(1, false)]),
            player(2, &[(2, false)]),
        ]);

        let res = resolve_warmup(
            WarmupAction::TinyTossRight,
            &roster,
            0,
            0,
            &WarmupTargets::default(),
            &mut gift_ids(&[(2, false)]),
            &env(0),
        );

        assert_eq!(res.roster.players()[0].gifts[0].id, GiftId(2));
        assert_eq!(res.roster.players()[1].gifts[0].id, GiftId(0));
        assert_eq!(res.roster.players()[2].gifts[0].id, GiftId(1));
        // Conservation: everyone still holds exactly one gift.
        assert!(res.roster.players().iter().all(|p| p.gift_count() == 1));
    }

    #[test]
    fn incoming_gift_is_not_resent_in_the_same_toss() {
        // Only seat 0 holds a gift. After the toss, seat 1 has it; seat 1's
        // own pick was taken on the snapshot (empty), so the gift must not
        // travel two seats.
        let roster = Roster::new(vec![
            player(0, &[(0, false)]),
            player(1, &[]),
            player(2, &[]),
        ]);

        let res = resolve_warmup(
            WarmupAction::TinyTossRight,
            &roster,
            0,
            0,
            &WarmupTargets::default(),
            &mut gift_ids(&[(0, false)]),
            &env(0),
        );

        assert_eq!(res.roster.players()[1].gifts[0].id, GiftId(0));
        assert!(res.roster.players()[2].gifts.is_empty());
    }

    #[test]
    fn mega_move_sends_largest_left_and_skips_locked() {
        // Seat 0 holds [unlocked#0, unlocked#1, locked#2]: largest unlocked
        // is #1 and it goes to the left neighbor (seat 1 in a 2-roster).
        let roster = Roster::new(vec![
            player(0, &[(0, false), (1, false), (2, true)]),
            player(1, &[]),
        ]);

        let res = resolve_warmup(
            WarmupAction::MegaMoveLeft,
            &roster,
            0,
            0,
            &WarmupTargets::default(),
            &mut gift_ids(&[(2, true)]),
            &env(0),
        );

        assert_eq!(res.roster.players()[1].gifts[0].id, GiftId(1));
        let seat0: Vec<_> = res.roster.players()[0].gifts.iter().map(|g| g.id).collect();
        assert_eq!(seat0, vec![GiftId(0), GiftId(2)]);
    }
}
