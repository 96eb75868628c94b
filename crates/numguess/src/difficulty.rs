//! Difficulty levels and their attempt budgets.

use serde::{Deserialize, Serialize};

/// Selects how many guesses a session is allowed.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Ten attempts.
    #[default]
    Easy,
    /// Seven attempts.
    Hard,
}

impl Difficulty {
    /// Number of guesses a session of this difficulty starts with.
    pub fn max_attempts(self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Hard => 7,
        }
    }

    /// The other difficulty, used by front-ends that toggle between the two.
    pub fn toggled(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}
