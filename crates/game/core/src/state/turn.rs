/// Turn bookkeeping: whose turn it is and how many rolls everyone has left.
///
/// Budgets and warm-up counters are vectors aligned with roster order; the
/// roster never reorders after game start, so the seat index is a stable
/// key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Seat index of the player whose turn it is.
    pub current_player: usize,

    /// Rolls remaining this phase, per seat. Never negative.
    pub roll_budget: Vec<u32>,

    /// Warm-up rolls taken per seat, tracked independently of budget
    /// refills so mini-rounds don't mask the per-player minimum.
    pub warmup_rolls_taken: Vec<u32>,

    /// Set while a prepared roll awaits its commit. Not persisted: a
    /// snapshot is only taken between rolls and a restored session never
    /// resumes mid-roll.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub roll_in_flight: bool,
}

impl TurnState {
    /// Fresh turn state for `count` players with `budget` rolls each.
    pub fn for_players(count: usize, budget: u32) -> Self {
        Self {
            current_player: 0,
            roll_budget: vec![budget; count],
            warmup_rolls_taken: vec![0; count],
            roll_in_flight: false,
        }
    }

    /// Total rolls remaining across all players.
    pub fn total_budget(&self) -> u32 {
        self.roll_budget.iter().sum()
    }

    /// Sets every seat's budget to `budget`.
    pub fn refill_all(&mut self, budget: u32) {
        self.roll_budget.fill(budget);
    }
}
