//! Move selection on top of the search.

use crate::{
    ALPHA_FLOOR, BETA_CEILING, Board, Difficulty, EngineError, EngineErrorKind, Player, Position,
    Score, Square, search,
};
use rand::Rng;
use rand::prelude::IndexedRandom;
use tracing::{debug, instrument, trace};

/// The engine's answer for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveChoice {
    position: Position,
    nodes: u64,
}

impl MoveChoice {
    /// Square to play.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Board index (0-8) of the square to play.
    pub fn index(&self) -> usize {
        self.position.to_index()
    }

    /// Nodes searched to reach the decision, at least 1.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// Picks a move for `side` using the thread-local RNG for Easy.
///
/// See [`choose_move_with_rng`].
pub fn choose_move(
    board: &mut Board,
    side: Player,
    difficulty: Difficulty,
) -> Result<MoveChoice, EngineError> {
    choose_move_with_rng(board, side, difficulty, &mut rand::rng())
}

/// Picks a move for `side`.
///
/// Easy plays a uniformly random empty square without searching. Medium and
/// Hard search every empty square in ascending order with the difficulty's
/// depth limit and keep the first square whose score is strictly best for
/// `side`, so ties resolve to the lowest index. The reported node count is
/// the sum over all searched candidates.
///
/// The board is restored before returning.
///
/// # Errors
///
/// Returns [`EngineErrorKind::NoLegalMoves`] if the board has no empty square.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn choose_move_with_rng<R: Rng + ?Sized>(
    board: &mut Board,
    side: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<MoveChoice, EngineError> {
    let empties: Vec<Position> = board.empty_positions().collect();
    if empties.is_empty() {
        return Err(EngineError::new(EngineErrorKind::NoLegalMoves));
    }

    if difficulty == Difficulty::Easy {
        let position = *empties
            .choose(rng)
            .ok_or_else(|| EngineError::new(EngineErrorKind::NoLegalMoves))?;
        debug!(%position, "Picked random move");
        return Ok(MoveChoice { position, nodes: 1 });
    }

    let depth = difficulty.depth_limit();
    let mut best: Option<(Position, Score)> = None;
    let mut nodes = 0;

    for pos in empties {
        board.set(pos, Square::Occupied(side));
        let result = search(board, side.opponent(), ALPHA_FLOOR, BETA_CEILING, depth);
        board.set(pos, Square::Empty);

        trace!(position = %pos, score = result.score, nodes = result.nodes, "Scored candidate");
        nodes += result.nodes;

        let improves = match best {
            None => true,
            Some((_, score)) => match side {
                Player::X => result.score > score,
                Player::O => result.score < score,
            },
        };
        if improves {
            best = Some((pos, result.score));
        }
    }

    let (position, score) = best.ok_or_else(|| EngineError::new(EngineErrorKind::NoLegalMoves))?;
    debug!(%position, score, nodes, "Selected move");
    Ok(MoveChoice {
        position,
        nodes: nodes.max(1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_won;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_full_board_is_an_error() {
        let mut board: Board = "XOX/OXX/OXO".parse().unwrap();
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let err = choose_move(&mut board, Player::X, difficulty).unwrap_err();
            assert_eq!(err.kind, EngineErrorKind::NoLegalMoves);
        }
    }

    #[test]
    fn test_o_completes_bottom_row() {
        let mut board: Board = "X__/_X_/OO_".parse().unwrap();
        let choice = choose_move(&mut board, Player::O, Difficulty::Hard).unwrap();
        assert_eq!(choice.index(), 8);
        assert_eq!(board.to_string(), "X__/_X_/OO_");

        board.set(choice.position(), Square::Occupied(Player::O));
        assert_eq!(is_won(&board), Some(Player::O));
    }

    #[test]
    fn test_empty_board_hard_is_deterministic() {
        let mut board = Board::new();
        let first = choose_move(&mut board, Player::X, Difficulty::Hard).unwrap();
        let second = choose_move(&mut board, Player::X, Difficulty::Hard).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.position(), Position::TopLeft);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_nodes_are_summed_over_candidates() {
        let mut board: Board = "X__/_X_/OO_".parse().unwrap();
        let expected: u64 = board
            .empty_positions()
            .map(|pos| {
                let mut scratch = board.clone();
                scratch.set(pos, Square::Occupied(Player::O));
                search(&mut scratch, Player::X, ALPHA_FLOOR, BETA_CEILING, None).nodes
            })
            .sum();
        let choice = choose_move(&mut board, Player::O, Difficulty::Hard).unwrap();
        assert_eq!(choice.nodes(), expected);
    }

    #[test]
    fn test_single_empty_square() {
        let mut board: Board = "XOX/OXO/OX_".parse().unwrap();
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let choice = choose_move(&mut board, Player::X, difficulty).unwrap();
            assert_eq!(choice.position(), Position::BottomRight);
            assert!(choice.nodes() >= 1);
        }
    }

    #[test]
    fn test_easy_is_legal_and_reports_one_node() {
        let mut rng = StdRng::seed_from_u64(7);
        let original: Board = "X_O/_X_/O__".parse().unwrap();
        let mut board = original.clone();
        for _ in 0..50 {
            let choice =
                choose_move_with_rng(&mut board, Player::X, Difficulty::Easy, &mut rng).unwrap();
            assert!(original.is_empty(choice.position()));
            assert_eq!(choice.nodes(), 1);
        }
        assert_eq!(board, original);
    }

    #[test]
    fn test_easy_is_reproducible_with_seed() {
        let mut board = Board::new();
        let picks = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut board = Board::new();
            (0..10)
                .map(|_| {
                    choose_move_with_rng(&mut board, Player::O, Difficulty::Easy, &mut rng)
                        .unwrap()
                        .position()
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(42), picks(42));
        assert!(choose_move(&mut board, Player::X, Difficulty::Easy).is_ok());
    }

    #[test]
    fn test_medium_takes_immediate_win() {
        let mut board: Board = "XX_/OO_/___".parse().unwrap();
        let choice = choose_move(&mut board, Player::X, Difficulty::Medium).unwrap();
        assert_eq!(choice.position(), Position::TopRight);
    }

    #[test]
    fn test_medium_blocks_immediate_threat() {
        // X threatens 0-4-8; O's only non-losing move is the block.
        let mut board: Board = "X__/_X_/O__".parse().unwrap();
        let choice = choose_move(&mut board, Player::O, Difficulty::Medium).unwrap();
        assert_eq!(choice.position(), Position::BottomRight);
    }

    #[test]
    fn test_medium_walks_into_a_lost_position() {
        // Against a corner opening only the center holds the draw. Medium's
        // two-ply horizon scores the edge reply as neutral and takes it.
        let mut board: Board = "X__/___/___".parse().unwrap();
        let medium = choose_move(&mut board, Player::O, Difficulty::Medium).unwrap();
        let hard = choose_move(&mut board, Player::O, Difficulty::Hard).unwrap();
        assert_eq!(medium.position(), Position::TopCenter);
        assert_eq!(hard.position(), Position::Center);

        board.set(medium.position(), Square::Occupied(Player::O));
        let outcome = search(&mut board, Player::X, ALPHA_FLOOR, BETA_CEILING, None);
        assert_eq!(outcome.score, crate::X_WINS);
    }
}
