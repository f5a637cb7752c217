/// Opaque gift identifier, unique for the life of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GiftId(pub u64);

impl std::fmt::Display for GiftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "gift-{}", self.0)
    }
}

/// Atomic gift token.
///
/// Owned by exactly one player or the shared pile at any time. `locked` is
/// one-way: the freeze action sets it and nothing ever clears it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gift {
    pub id: GiftId,
    pub locked: bool,
}

impl Gift {
    /// New unlocked gift, as drawn from the pile.
    pub fn new(id: GiftId) -> Self {
        Self { id, locked: false }
    }
}

/// Sequential allocator for gift identifiers.
///
/// Ids are never reused; a full game reset discards the allocator along
/// with every gift it named.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GiftIdAllocator {
    next: u64,
}

impl GiftIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a fresh, never-used [`GiftId`].
    pub fn allocate(&mut self) -> GiftId {
        let id = GiftId(self.next);
        self.next += 1;
        id
    }
}
