/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Rolls granted to every player when the warm-up phase begins.
    pub warmup_rolls: u32,
    /// Rolls granted to every player when the endgame phase begins.
    pub endgame_rolls: u32,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Minimum number of players required to start a game.
    pub const MIN_PLAYERS: usize = 2;
    /// Gifts seeded into the pile per player when no explicit size is given.
    pub const GIFTS_PER_PLAYER: u32 = 2;
    /// Maximum number of retained log entries (newest first).
    pub const LOG_CAPACITY: usize = 60;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_WARMUP_ROLLS: u32 = 3;
    pub const DEFAULT_ENDGAME_ROLLS: u32 = 3;

    pub fn new() -> Self {
        Self {
            warmup_rolls: Self::DEFAULT_WARMUP_ROLLS,
            endgame_rolls: Self::DEFAULT_ENDGAME_ROLLS,
        }
    }

    /// Default pile size for a roster of the given player count.
    pub fn default_pile_size(player_count: usize) -> u32 {
        player_count as u32 * Self::GIFTS_PER_PLAYER
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
