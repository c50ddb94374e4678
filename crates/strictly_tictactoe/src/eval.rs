//! Terminal evaluation.

use crate::{Board, Player, is_won};

/// Minimax score, always from X's point of view.
pub type Score = i8;

/// X holds a complete line.
pub const X_WINS: Score = 1;
/// O holds a complete line.
pub const O_WINS: Score = -1;
/// Drawn, undecided, or cut off by the depth limit.
pub const DRAW: Score = 0;

/// Scores a board: +1 if X has won, -1 if O has won, 0 otherwise.
///
/// An unfinished board scores 0 as well. At a depth cutoff that makes the
/// evaluation deliberately blind to threats, which is what keeps
/// [`Difficulty::Medium`](crate::Difficulty::Medium) beatable.
pub fn evaluate(board: &Board) -> Score {
    match is_won(board) {
        Some(Player::X) => X_WINS,
        Some(Player::O) => O_WINS,
        None => DRAW,
    }
}
