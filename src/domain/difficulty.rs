use serde::{Deserialize, Serialize};

use super::fixed::Fixed;

/// Skill difficulty tier. Each tier carries the GURPS 4E baseline
/// relative-skill-level modifier applied before any customization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Easy,
    Average,
    Hard,
    VeryHard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [Self::Easy, Self::Average, Self::Hard, Self::VeryHard];

    /// Baseline relative skill level at 1 point invested.
    pub fn base_relative_level(self) -> Fixed {
        match self {
            Self::Easy => Fixed::ZERO,
            Self::Average => Fixed::from_int(-1),
            Self::Hard => Fixed::from_int(-2),
            Self::VeryHard => Fixed::from_int(-3),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Average => "average",
            Self::Hard => "hard",
            Self::VeryHard => "very_hard",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Average => "Average",
            Self::Hard => "Hard",
            Self::VeryHard => "Very Hard",
        }
    }
}
