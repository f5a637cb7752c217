use crate::state::types::Phase;

/// Rejected game start. The session state is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("need at least {min} players, got {got}")]
    TooFewPlayers { got: usize, min: usize },
    #[error("pile size must be positive")]
    ZeroPileSize,
}

/// Rejected roll. The session state is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RollError {
    #[error("rolls are not accepted in the {0} phase")]
    WrongPhase(Phase),
    #[error("a roll is already in flight")]
    RollInFlight,
    #[error("no roll is in flight")]
    NoRollInFlight,
    #[error("player {player} has no rolls left")]
    BudgetExhausted { player: usize },
    #[error("face {face} is not currently eligible")]
    IneligibleFace { face: u8 },
    #[error("no face is currently eligible")]
    NoEligibleFace,
}
