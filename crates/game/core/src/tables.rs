//! Declarative per-phase action catalogs.
//!
//! Each phase maps the six die faces to an action entry carrying the
//! localization keys for its title/description and an eligibility
//! predicate. The engine only offers or resolves faces whose predicate
//! holds for the current actor, roster, and pile.

use crate::state::types::{Face, Phase, Roster};

type Eligibility = fn(usize, &Roster, u32) -> bool;

/// One face's entry in a phase table.
#[derive(Clone, Copy)]
pub struct ActionEntry {
    pub face: Face,
    pub title_key: &'static str,
    pub description_key: &'static str,
    requires: Eligibility,
}

impl ActionEntry {
    /// Whether this face may be offered or resolved right now.
    pub fn is_available(&self, actor: usize, roster: &Roster, pile: u32) -> bool {
        (self.requires)(actor, roster, pile)
    }
}

/// A phase's complete 6-face catalog.
pub struct ActionTable {
    entries: [ActionEntry; 6],
}

impl ActionTable {
    pub fn warmup() -> &'static ActionTable {
        &WARMUP_TABLE
    }

    pub fn endgame() -> &'static ActionTable {
        &ENDGAME_TABLE
    }

    /// Table in effect for a phase. Setup previews the warm-up table, the
    /// ended phase keeps showing the endgame one.
    pub fn for_phase(phase: Phase) -> &'static ActionTable {
        match phase {
            Phase::Setup | Phase::Warmup => Self::warmup(),
            Phase::Endgame | Phase::Ended => Self::endgame(),
        }
    }

    pub fn entry(&self, face: Face) -> &ActionEntry {
        &self.entries[face.index()]
    }

    /// All faces currently available to `actor`.
    pub fn available_faces(&self, actor: usize, roster: &Roster, pile: u32) -> Vec<Face> {
        self.entries
            .iter()
            .filter(|entry| entry.is_available(actor, roster, pile))
            .map(|entry| entry.face)
            .collect()
    }
}

// ===== warm-up eligibility =====

fn pile_has_two(_actor: usize, _roster: &Roster, pile: u32) -> bool {
    pile >= 2
}

fn pile_has_one(_actor: usize, _roster: &Roster, pile: u32) -> bool {
    pile >= 1
}

fn actor_has_gifts(actor: usize, roster: &Roster, _pile: u32) -> bool {
    roster.get(actor).is_some_and(|p| p.has_gifts())
}

fn other_has_unlocked(actor: usize, roster: &Roster, _pile: u32) -> bool {
    !roster.others_with_unlocked(actor).is_empty()
}

fn anyone_has_gifts(_actor: usize, roster: &Roster, _pile: u32) -> bool {
    roster.any_gifts()
}

// ===== endgame eligibility =====

fn actor_has_unlocked(actor: usize, roster: &Roster, _pile: u32) -> bool {
    roster.get(actor).is_some_and(|p| p.has_unlocked())
}

fn actor_and_other_have_unlocked(actor: usize, roster: &Roster, pile: u32) -> bool {
    actor_has_unlocked(actor, roster, pile) && other_has_unlocked(actor, roster, pile)
}

fn two_holders_of_unlocked(_actor: usize, roster: &Roster, _pile: u32) -> bool {
    roster.unlocked_holder_count() >= 2
}

fn anyone_has_unlocked(_actor: usize, roster: &Roster, _pile: u32) -> bool {
    roster.any_unlocked()
}

static WARMUP_TABLE: ActionTable = ActionTable {
    entries: [
        ActionEntry {
            face: Face::One,
            title_key: "actions.warmup.1.title",
            description_key: "actions.warmup.1.desc",
            requires: pile_has_two,
        },
        ActionEntry {
            face: Face::Two,
            title_key: "actions.warmup.2.title",
            description_key: "actions.warmup.2.desc",
            requires: pile_has_one,
        },
        ActionEntry {
            face: Face::Three,
            title_key: "actions.warmup.3.title",
            description_key: "actions.warmup.3.desc",
            requires: actor_has_gifts,
        },
        ActionEntry {
            face: Face::Four,
            title_key: "actions.warmup.4.title",
            description_key: "actions.warmup.4.desc",
            requires: other_has_unlocked,
        },
        ActionEntry {
            face: Face::Five,
            title_key: "actions.warmup.5.title",
            description_key: "actions.warmup.5.desc",
            requires: anyone_has_gifts,
        },
        ActionEntry {
            face: Face::Six,
            title_key: "actions.warmup.6.title",
            description_key: "actions.warmup.6.desc",
            requires: anyone_has_gifts,
        },
    ],
};

static ENDGAME_TABLE: ActionTable = ActionTable {
    entries: [
        ActionEntry {
            face: Face::One,
            title_key: "actions.endgame.1.title",
            description_key: "actions.endgame.1.desc",
            requires: actor_has_unlocked,
        },
        ActionEntry {
            face: Face::Two,
            title_key: "actions.endgame.2.title",
            description_key: "actions.endgame.2.desc",
            requires: other_has_unlocked,
        },
        ActionEntry {
            face: Face::Three,
            title_key: "actions.endgame.3.title",
            description_key: "actions.endgame.3.desc",
            requires: actor_and_other_have_unlocked,
        },
        ActionEntry {
            face: Face::Four,
            title_key: "actions.endgame.4.title",
            description_key: "actions.endgame.4.desc",
            requires: two_holders_of_unlocked,
        },
        ActionEntry {
            face: Face::Five,
            title_key: "actions.endgame.5.title",
            description_key: "actions.endgame.5.desc",
            requires: actor_has_unlocked,
        },
        ActionEntry {
            face: Face::Six,
            title_key: "actions.endgame.6.title",
            description_key: "actions.endgame.6.desc",
            requires: anyone_has_unlocked,
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::{Gift, GiftId, Player, PlayerId};

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

    fn faces(table: &ActionTable, actor: usize, roster: &Roster, pile: u32) -> Vec<u8> {
        table
            .available_faces(actor, roster, pile)
            .into_iter()
            .map(Face::value)
            .collect()
    }

    #[test]
    fn warmup_grabs_gate_on_pile_size() {
        let roster = Roster::new(vec![player(0, &[]), player(1, &[])]);
        assert_eq!(faces(ActionTable::warmup(), 0, &roster, 0), Vec::<u8>::new());
        assert_eq!(faces(ActionTable::warmup(), 0, &roster, 1), vec![2]);
        assert!(faces(ActionTable::warmup(), 0, &roster, 2).contains(&1));
    }

    #[test]
    fn warmup_tribute_needs_actor_gifts() {
        let roster = Roster::new(vec![player(0, &[(0, false)]), player(1, &[])]);
        let available = faces(ActionTable::warmup(), 0, &roster, 0);
        assert!(available.contains(&3));
        assert!(!faces(ActionTable::warmup(), 1, &roster, 0).contains(&3));
    }

    #[test]
    fn warmup_steal_needs_unlocked_elsewhere() {
        // Player 1 only holds a locked gift, so player 0 has nothing to steal.
        let roster = Roster::new(vec![player(0, &[(0, false)]), player(1, &[(1, true)])]);
        assert!(!faces(ActionTable::warmup(), 0, &roster, 0).contains(&4));
        assert!(faces(ActionTable::warmup(), 1, &roster, 0).contains(&4));
    }

    #[test]
    fn warmup_passes_need_any_gift() {
        let empty = Roster::new(vec![player(0, &[]), player(1, &[])]);
        assert!(!faces(ActionTable::warmup(), 0, &empty, 0).contains(&5));

        let roster = Roster::new(vec![player(0, &[]), player(1, &[(0, true)])]);
        let available = faces(ActionTable::warmup(), 0, &roster, 0);
        assert!(available.contains(&5));
        assert!(available.contains(&6));
    }

    #[test]
    fn endgame_table_gates_on_unlocked_distribution() {
        // Actor holds one unlocked gift, the other player only locked ones.
        let roster = Roster::new(vec![player(0, &[(0, false)]), player(1, &[(1, true)])]);
        let available = faces(ActionTable::endgame(), 0, &roster, 0);
        assert_eq!(available, vec![1, 5, 6]);

        // Give the other player an unlocked gift: everything opens up.
        let roster = Roster::new(vec![
            player(0, &[(0, false)]),
            player(1, &[(1, true), (2, false)]),
        ]);
        let available = faces(ActionTable::endgame(), 0, &roster, 0);
        assert_eq!(available, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn endgame_joker_needs_two_distinct_holders() {
        let roster = Roster::new(vec![
            player(0, &[(0, false), (1, false)]),
            player(1, &[(2, true)]),
        ]);
        assert!(!faces(ActionTable::endgame(), 0, &roster, 0).contains(&4));
    }
}
