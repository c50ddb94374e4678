//! AI strength tiers.

use serde::{Deserialize, Serialize};

/// How hard the engine tries.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random legal move, no search.
    Easy,
    /// Search limited to two plies below each candidate move.
    Medium,
    /// Search to the end of the game on every branch.
    #[default]
    Hard,
}

impl Difficulty {
    /// Depth limit handed to the search, `None` meaning unbounded.
    ///
    /// Easy never searches, so it has no limit to report.
    pub fn depth_limit(self) -> Option<u32> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(2),
            Difficulty::Hard => None,
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy   (random)",
            Difficulty::Medium => "Medium (depth-2)",
            Difficulty::Hard => "Hard   (perfect)",
        }
    }
}
