use serde::{Deserialize, Serialize};
use std::fmt;

/// Four difficulty tiers shared by every quiz domain.
///
/// The tier picks the generation or sampling rule and the time allowed per
/// question:
/// - `Easy`: 30 seconds
/// - `Medium`: 60 seconds
/// - `Hard`: 180 seconds
/// - `Expert`: 300 seconds
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(from = "i64", into = "u8")]
pub enum DifficultyLevel {
    #[default]
    Easy,
    Medium,
    Hard,
    Expert,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Maps any requested level onto 1..=4, saturating at both ends.
    #[must_use]
    pub fn clamped(requested: i64) -> Self {
        match requested.clamp(1, 4) {
            1 => Self::Easy,
            2 => Self::Medium,
            3 => Self::Hard,
            _ => Self::Expert,
        }
    }

    /// Numeric tier, 1 through 4.
    #[must_use]
    pub fn value(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
            Self::Expert => 4,
        }
    }

    /// Time limit for a single question at this tier.
    #[must_use]
    pub fn seconds_per_question(self) -> u32 {
        match self {
            Self::Easy => 30,
            Self::Medium => 60,
            Self::Hard => 180,
            Self::Expert => 300,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
        }
    }
}

// Serde goes through `i64` so stored or configured levels are clamped the same way.
impl From<i64> for DifficultyLevel {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<DifficultyLevel> for u8 {
    fn from(level: DifficultyLevel) -> Self {
        level.value()
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {}", self.value())
    }
}
