use super::gift::{Gift, GiftId};

/// Opaque player identifier, assigned in turn order at game start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u32);

/// A seated player and the gifts they currently hold.
///
/// The gift sequence is insertion-ordered and the order is meaningful:
/// "smallest" means first unlocked by insertion, "largest" means last.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub gifts: Vec<Gift>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            gifts: Vec::new(),
        }
    }

    pub fn gift_count(&self) -> usize {
        self.gifts.len()
    }

    pub fn has_gifts(&self) -> bool {
        !self.gifts.is_empty()
    }

    pub fn unlocked_count(&self) -> usize {
        self.gifts.iter().filter(|g| !g.locked).count()
    }

    pub fn has_unlocked(&self) -> bool {
        self.gifts.iter().any(|g| !g.locked)
    }

    /// Index of the smallest (first by insertion) unlocked gift.
    pub fn first_unlocked(&self) -> Option<usize> {
        self.gifts.iter().position(|g| !g.locked)
    }

    /// Index of the largest (last by insertion) unlocked gift.
    pub fn last_unlocked(&self) -> Option<usize> {
        self.gifts.iter().rposition(|g| !g.locked)
    }

    /// Indices of every unlocked gift, in insertion order.
    pub fn unlocked_indices(&self) -> Vec<usize> {
        self.gifts
            .iter()
            .enumerate()
            .filter(|(_, g)| !g.locked)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Removes a gift by id, preserving the order of the rest.
    pub fn remove_gift(&mut self, id: GiftId) -> Option<Gift> {
        let idx = self.gifts.iter().position(|g| g.id == id)?;
        Some(self.gifts.remove(idx))
    }

    /// Removes and returns every unlocked gift, leaving locked gifts in
    /// place in their original order.
    pub fn extract_unlocked(&mut self) -> Vec<Gift> {
        let (unlocked, locked): (Vec<_>, Vec<_>) =
            self.gifts.drain(..).partition(|g| !g.locked);
        self.gifts = locked;
        unlocked
    }
}

/// Seated players in turn order.
///
/// The order is fixed for the life of a game and doubles as the circular
/// neighbor topology for pass-left/pass-right actions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    /// Seat immediately to the right (next in turn order, circular).
    pub fn right_of(&self, index: usize) -> usize {
        (index + 1) % self.players.len()
    }

    /// Seat immediately to the left (previous in turn order, circular).
    pub fn left_of(&self, index: usize) -> usize {
        (index + self.players.len() - 1) % self.players.len()
    }

    /// Seat indices of everyone except `index`, in turn order.
    pub fn others(&self, index: usize) -> Vec<usize> {
        (0..self.players.len()).filter(|&i| i != index).collect()
    }

    /// Seat indices of other players currently holding an unlocked gift.
    pub fn others_with_unlocked(&self, index: usize) -> Vec<usize> {
        self.others(index)
            .into_iter()
            .filter(|&i| self.players[i].has_unlocked())
            .collect()
    }

    /// Number of distinct players holding at least one unlocked gift.
    pub fn unlocked_holder_count(&self) -> usize {
        self.players.iter().filter(|p| p.has_unlocked()).count()
    }

    pub fn any_gifts(&self) -> bool {
        self.players.iter().any(Player::has_gifts)
    }

    pub fn any_unlocked(&self) -> bool {
        self.players.iter().any(Player::has_unlocked)
    }

    /// Total gifts held across the roster (excluding the pile).
    pub fn total_gifts(&self) -> u32 {
        self.players.iter().map(|p| p.gift_count() as u32).sum()
    }
}
