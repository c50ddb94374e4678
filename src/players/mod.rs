//! Player trait and implementations.

mod engine;
mod human;

pub use engine::EnginePlayer;
pub use human::HumanPlayer;

use crate::console::Terminal;
use anyhow::Result;
use strictly_tictactoe::{Board, Player as Mark, Position};

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// `board` is the current position and `mark` the side this player is
    /// playing. The returned position must be empty.
    fn select_move(&mut self, board: &Board, mark: Mark, term: &mut dyn Terminal)
    -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
