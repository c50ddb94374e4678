//! Win/loss/draw tally for the human player.

use derive_getters::Getters;
use strictly_tictactoe::Player as Mark;
use tracing::instrument;

/// How a finished game went for the human.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The human completed a line.
    Win,
    /// The AI completed a line.
    Loss,
    /// Full board, no line.
    Draw,
}

impl Verdict {
    /// Message shown after the final board.
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Win => "You win!",
            Verdict::Loss => "AI wins.",
            Verdict::Draw => "It's a draw.",
        }
    }
}

/// Running tally across games in one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Scoreboard {
    wins: u32,
    losses: u32,
    draws: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished game from the point of view of `human`.
    #[instrument(skip(self))]
    pub fn record(&mut self, winner: Option<Mark>, human: Mark) -> Verdict {
        let verdict = match winner {
            None => Verdict::Draw,
            Some(mark) if mark == human => Verdict::Win,
            Some(_) => Verdict::Loss,
        };
        match verdict {
            Verdict::Win => self.wins += 1,
            Verdict::Loss => self.losses += 1,
            Verdict::Draw => self.draws += 1,
        }
        verdict
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Score  W:{} L:{} D:{}", self.wins, self.losses, self.draws)
    }
}
