//! AI player backed by the minimax engine.

use super::Player;
use crate::console::Terminal;
use crate::render::group_thousands;
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_tictactoe::{Board, Difficulty, Player as Mark, Position, choose_move_with_rng};
use tracing::{debug, instrument};

/// AI player at a fixed difficulty.
#[derive(Debug)]
pub struct EnginePlayer {
    name: String,
    difficulty: Difficulty,
    rng: StdRng,
}

impl EnginePlayer {
    /// Creates an engine player seeded from the operating system.
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, StdRng::from_os_rng())
    }

    /// Creates an engine player whose Easy moves replay for a given seed.
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, StdRng::seed_from_u64(seed))
    }

    fn with_rng(difficulty: Difficulty, rng: StdRng) -> Self {
        Self {
            name: format!("AI ({difficulty})"),
            difficulty,
            rng,
        }
    }
}

impl Player for EnginePlayer {
    #[instrument(skip(self, board, term), fields(ai = %self.name, board = %board))]
    fn select_move(
        &mut self,
        board: &Board,
        mark: Mark,
        term: &mut dyn Terminal,
    ) -> Result<Position> {
        let mut scratch = board.clone();
        let choice = choose_move_with_rng(&mut scratch, mark, self.difficulty, &mut self.rng)
            .context("Engine could not pick a move")?;
        let position = choice.position();
        debug!(%position, nodes = choice.nodes(), "AI chose position");

        term.write_line(&format!(
            "{} plays ({},{}) – searched {} nodes.",
            self.name,
            position.row() + 1,
            position.column() + 1,
            group_thousands(choice.nodes()),
        ))?;
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
