//! Die faces and the per-phase actions they trigger.

/// A six-sided die face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Face {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::One,
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Six,
    ];

    /// Die value, 1..=6.
    pub fn value(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Zero-based table index.
    pub fn index(self) -> usize {
        match self {
            Face::One => 0,
            Face::Two => 1,
            Face::Three => 2,
            Face::Four => 3,
            Face::Five => 4,
            Face::Six => 5,
        }
    }

    pub fn from_value(value: u8) -> Option<Face> {
        match value {
            1..=6 => Some(Face::ALL[value as usize - 1]),
            _ => None,
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Warm-up phase action, one per face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WarmupAction {
    DoubleGrab,
    SingleGrab,
    ForcedTribute,
    GrinchTax,
    TinyTossRight,
    MegaMoveLeft,
}

impl WarmupAction {
    pub fn for_face(face: Face) -> Self {
        match face {
            Face::One => WarmupAction::DoubleGrab,
            Face::Two => WarmupAction::SingleGrab,
            Face::Three => WarmupAction::ForcedTribute,
            Face::Four => WarmupAction::GrinchTax,
            Face::Five => WarmupAction::TinyTossRight,
            Face::Six => WarmupAction::MegaMoveLeft,
        }
    }
}

/// Endgame phase action, one per face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndgameAction {
    IceLock,
    FullFlip,
    TrashTrade,
    JokerSwap,
    SantasHand,
    TwistOfFate,
}

impl EndgameAction {
    pub fn for_face(face: Face) -> Self {
        match face {
            Face::One => EndgameAction::IceLock,
            Face::Two => EndgameAction::FullFlip,
            Face::Three => EndgameAction::TrashTrade,
            Face::Four => EndgameAction::JokerSwap,
            Face::Five => EndgameAction::SantasHand,
            Face::Six => EndgameAction::TwistOfFate,
        }
    }
}

/// Rotation direction for the circular pass actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Left,
    Right,
}
