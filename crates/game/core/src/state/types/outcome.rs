//! Roll outcome and narrative descriptors surfaced to the presentation
//! layer.

use super::face::{Direction, Face};
use super::phase::Phase;

/// The last resolved roll: which face came up and under which phase table.
///
/// Title and description keys are derived from `(phase, face)` through
/// [`crate::tables::ActionTable`]; the outcome itself stays minimal so the
/// snapshot is a plain record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollOutcome {
    pub phase: Phase,
    pub face: Face,
}

/// Narrative descriptor for a successful action.
///
/// Like [`super::log::LogEvent`], this is a message key plus parameters —
/// the localization provider renders the sentence, the engine never does.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Narrative {
    PileGrab { actor: String, count: u32 },
    Tribute { actor: String, target: String },
    Steal { actor: String, target: String },
    TinyTossRight,
    MegaMoveLeft,
    Freeze { actor: String },
    Flip { actor: String, target: String },
    TrashTrade { actor: String, target: String },
    JokerSwap { first: String, second: String },
    SantasHand { actor: String, target: String },
    TwistOfFate { direction: Direction },
}

impl Narrative {
    /// Stable message key for the localization provider.
    pub fn key(&self) -> &'static str {
        match self {
            Narrative::PileGrab { .. } => "narr.warmup.grab",
            Narrative::Tribute { .. } => "narr.warmup.tribute",
            Narrative::Steal { .. } => "narr.warmup.steal",
            Narrative::TinyTossRight => "narr.warmup.tiny",
            Narrative::MegaMoveLeft => "narr.warmup.mega",
            Narrative::Freeze { .. } => "narr.endgame.freeze",
            Narrative::Flip { .. } => "narr.endgame.flip",
            Narrative::TrashTrade { .. } => "narr.endgame.trash",
            Narrative::JokerSwap { .. } => "narr.endgame.joker",
            Narrative::SantasHand { .. } => "narr.endgame.santa",
            Narrative::TwistOfFate { .. } => "narr.endgame.twist",
        }
    }
}
