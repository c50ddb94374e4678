//! Human player reading square numbers from the terminal.

use super::Player;
use crate::console::{Terminal, ask_number};
use anyhow::{Context, Result};
use strictly_tictactoe::{Board, Player as Mark, Position};
use tracing::debug;

/// Human player typing squares 1-9, row by row from the top left.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    fn select_move(
        &mut self,
        board: &Board,
        mark: Mark,
        term: &mut dyn Terminal,
    ) -> Result<Position> {
        loop {
            let n = ask_number(term, &format!("Your move ({mark}) 1-9: "), 1..=9)?;
            let position = Position::from_index(n as usize - 1).context("Square out of range")?;
            if board.is_empty(position) {
                debug!(player = %self.name, %position, "Human chose position");
                return Ok(position);
            }
            term.write_line("That square is occupied.")?;
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
