//! Execution environment handed to resolvers.
//!
//! [`GameEnv`] bundles the RNG oracle with the session's seed material so
//! that pure functions can draw random values without touching state.
mod rng;

pub use rng::{RngOracle, SplitMixOracle, derive_seed};

/// Per-draw seed contexts.
///
/// Each independent random decision inside one roll uses its own context so
/// the draws never alias (a roll needs up to one face draw, two target
/// draws, two gift draws, and a direction flip).
pub mod context {
    pub const FACE: u32 = 0;
    pub const PRIMARY_TARGET: u32 = 1;
    pub const SECONDARY_TARGET: u32 = 2;
    pub const PRIMARY_GIFT: u32 = 3;
    pub const SECONDARY_GIFT: u32 = 4;
    pub const DIRECTION: u32 = 5;
}

/// Read-only environment for one roll resolution.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    rng: &'a dyn RngOracle,
    game_seed: u64,
    nonce: u64,
}

impl<'a> GameEnv<'a> {
    pub fn new(rng: &'a dyn RngOracle, game_seed: u64, nonce: u64) -> Self {
        Self {
            rng,
            game_seed,
            nonce,
        }
    }

    /// Raw draw for the given context.
    pub fn draw(&self, context: u32) -> u32 {
        self.rng.next_u32(derive_seed(self.game_seed, self.nonce, context))
    }

    /// Uniform index draw in `0..len` for the given context.
    pub fn pick_index(&self, context: u32, len: usize) -> usize {
        self.rng
            .pick_index(derive_seed(self.game_seed, self.nonce, context), len)
    }

    /// Fair coin flip for the given context.
    pub fn coin_flip(&self, context: u32) -> bool {
        self.rng
            .coin_flip(derive_seed(self.game_seed, self.nonce, context))
    }
}

impl std::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEnv")
            .field("game_seed", &self.game_seed)
            .field("nonce", &self.nonce)
            .finish_non_exhaustive()
    }
}
