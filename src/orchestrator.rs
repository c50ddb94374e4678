//! Game orchestration between players.

use crate::console::Terminal;
use crate::players::Player;
use crate::render::BoardRenderer;
use anyhow::{Result, bail};
use derive_getters::Getters;
use strictly_tictactoe::{Board, Move, Player as Mark, Square, is_draw, is_won};
use tracing::{debug, info, instrument};

/// Final state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameOutcome {
    /// Side holding a completed line, `None` for a draw.
    winner: Option<Mark>,
    /// Board at the end of the game.
    board: Board,
    /// Moves in the order they were played.
    moves: Vec<Move>,
}

/// Runs one game between two players, X moving first.
pub struct Orchestrator {
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    renderer: BoardRenderer,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        renderer: BoardRenderer,
    ) -> Self {
        Self {
            player_x,
            player_o,
            renderer,
        }
    }

    fn show(&self, board: &Board, term: &mut dyn Terminal) -> Result<()> {
        term.write_line("")?;
        term.write_line(&self.renderer.render(board))?;
        Ok(())
    }

    /// Runs the game loop on a fresh board until someone wins or it fills up.
    ///
    /// # Errors
    ///
    /// Fails if a player errors (closed input, engine contract violation) or
    /// returns an occupied square.
    #[instrument(skip_all, fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self, term: &mut dyn Terminal) -> Result<GameOutcome> {
        info!("Starting game");
        let mut board = Board::new();
        let mut to_move = Mark::X;
        let mut moves = Vec::new();

        loop {
            self.show(&board, term)?;
            term.write_line("")?;

            let player = match to_move {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let position = player.select_move(&board, to_move, term)?;
            if !board.is_empty(position) {
                bail!("{} played occupied square {}", player.name(), position);
            }

            board.set(position, Square::Occupied(to_move));
            let mv = Move::new(to_move, position);
            debug!(%mv, board = %board, "Move made");
            moves.push(mv);

            let winner = is_won(&board);
            if winner.is_some() || is_draw(&board) {
                self.show(&board, term)?;
                info!(?winner, moves = moves.len(), "Game over");
                return Ok(GameOutcome {
                    winner,
                    board,
                    moves,
                });
            }
            to_move = to_move.opponent();
        }
    }
}
