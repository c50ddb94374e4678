//! Game mode selection.

use serde::{Deserialize, Serialize};
use strictly_tictactoe::Player as Mark;

/// Who sits on which side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive)]
pub enum PlayMode {
    /// Human plays X against the AI.
    #[serde(rename = "x")]
    #[strum(serialize = "x")]
    PlayAsX,
    /// Human plays O against the AI.
    #[serde(rename = "o")]
    #[strum(serialize = "o")]
    PlayAsO,
    /// AI vs AI, nobody to score.
    #[serde(rename = "watch")]
    #[strum(serialize = "watch")]
    Watch,
}

impl PlayMode {
    /// Menu entries in order.
    pub const ALL: [PlayMode; 3] = [PlayMode::PlayAsX, PlayMode::PlayAsO, PlayMode::Watch];

    /// Returns display name.
    pub fn label(self) -> &'static str {
        match self {
            PlayMode::PlayAsX => "Play as X",
            PlayMode::PlayAsO => "Play as O",
            PlayMode::Watch => "Watch AI vs AI",
        }
    }

    /// The human's mark, if a human is playing.
    pub fn human_mark(self) -> Option<Mark> {
        match self {
            PlayMode::PlayAsX => Some(Mark::X),
            PlayMode::PlayAsO => Some(Mark::O),
            PlayMode::Watch => None,
        }
    }
}
