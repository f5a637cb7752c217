/// Game phase, a strictly forward progression in normal play.
///
/// `setup → warmup → endgame → ended`. Only the debug override jumps
/// backward, and that path is outside the correctness contract.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Phase {
    Setup,
    Warmup,
    Endgame,
    Ended,
}

impl Phase {
    /// Whether `roll()` is accepted in this phase.
    pub fn accepts_rolls(self) -> bool {
        matches!(self, Phase::Warmup | Phase::Endgame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn string_forms_round_trip() {
        for phase in [Phase::Setup, Phase::Warmup, Phase::Endgame, Phase::Ended] {
            assert_eq!(Phase::from_str(&phase.to_string()).unwrap(), phase);
        }
    }

    #[test]
    fn only_play_phases_accept_rolls() {
        assert!(!Phase::Setup.accepts_rolls());
        assert!(Phase::Warmup.accepts_rolls());
        assert!(Phase::Endgame.accepts_rolls());
        assert!(!Phase::Ended.accepts_rolls());
    }
}
