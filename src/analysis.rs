//! Offline position reports for the `best-move` and `analyze` commands.

use crate::render::group_thousands;
use anyhow::Result;
use rand::Rng;
use strictly_tictactoe::{
    ALPHA_FLOOR, BETA_CEILING, Board, Difficulty, EngineError, EngineErrorKind, MoveChoice,
    Player as Mark, SearchResult, choose_move, choose_move_with_rng, minimax_exhaustive, search,
};
use tracing::instrument;

/// Pruned and unpruned search of the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analysis {
    /// Side to move.
    pub side: Mark,
    /// Alpha-beta result.
    pub pruned: SearchResult,
    /// Plain minimax result.
    pub exhaustive: SearchResult,
    /// Hard's pick, `None` on a full board.
    pub best: Option<MoveChoice>,
}

impl Analysis {
    /// Share of exhaustive nodes that pruning skipped, in percent.
    pub fn savings_percent(&self) -> f64 {
        let skipped = self.exhaustive.nodes.saturating_sub(self.pruned.nodes);
        100.0 * skipped as f64 / self.exhaustive.nodes as f64
    }
}

/// Searches `board` with and without pruning.
///
/// A full board still gets both searches and reports no best move.
///
/// # Errors
///
/// Propagates any engine error other than [`EngineErrorKind::NoLegalMoves`].
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board, side: Mark, depth: Option<u32>) -> Result<Analysis, EngineError> {
    let mut scratch = board.clone();
    let pruned = search(&mut scratch, side, ALPHA_FLOOR, BETA_CEILING, depth);
    let exhaustive = minimax_exhaustive(&mut scratch, side, depth);
    let best = match choose_move(&mut scratch, side, Difficulty::Hard) {
        Ok(choice) => Some(choice),
        Err(e) if e.kind == EngineErrorKind::NoLegalMoves => None,
        Err(e) => return Err(e),
    };
    Ok(Analysis {
        side,
        pruned,
        exhaustive,
        best,
    })
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Side to move: {}", self.side)?;
        writeln!(
            f,
            "Alpha-beta:   score {:+}, {} nodes",
            self.pruned.score,
            group_thousands(self.pruned.nodes)
        )?;
        writeln!(
            f,
            "Exhaustive:   score {:+}, {} nodes",
            self.exhaustive.score,
            group_thousands(self.exhaustive.nodes)
        )?;
        write!(f, "Pruning saved {:.1}% of nodes", self.savings_percent())?;
        if let Some(best) = self.best {
            write!(f, "\nBest move:    {} (index {})", best.position(), best.index())?;
        }
        Ok(())
    }
}

/// One-line description of the engine's pick for `board`.
///
/// # Errors
///
/// Fails if the board has no empty square.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn describe_best_move<R: Rng>(
    board: &Board,
    side: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<String> {
    let mut scratch = board.clone();
    let choice = choose_move_with_rng(&mut scratch, side, difficulty, rng)?;
    let position = choice.position();
    Ok(format!(
        "{side} ({difficulty}) plays {} at ({},{}), index {} – searched {} nodes.",
        position,
        position.row() + 1,
        position.column() + 1,
        choice.index(),
        group_thousands(choice.nodes()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strictly_tictactoe::Position;

    #[test]
    fn test_analysis_agrees_and_saves_nodes() {
        let board = Board::new();
        let analysis = analyze(&board, Mark::X, None).unwrap();
        assert_eq!(analysis.pruned.score, analysis.exhaustive.score);
        assert_eq!(analysis.exhaustive.nodes, 549_946);
        assert!(analysis.savings_percent() > 0.0);
        assert_eq!(analysis.best.map(|c| c.position()), Some(Position::TopLeft));
    }

    #[test]
    fn test_analysis_of_full_board_has_no_best_move() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        let analysis = analyze(&board, Mark::X, None).unwrap();
        assert_eq!(analysis.best, None);
        assert_eq!(analysis.pruned.nodes, 1);
        assert!(analysis.to_string().contains("Pruning saved 0.0%"));
    }

    #[test]
    fn test_analysis_of_decided_board_still_reports_a_move() {
        let board: Board = "XXX/OO_/___".parse().unwrap();
        let analysis = analyze(&board, Mark::O, None).unwrap();
        assert_eq!(analysis.pruned.nodes, 1);
        assert!(analysis.best.is_some());
    }

    #[test]
    fn test_describe_best_move() {
        let board: Board = "X__/_X_/OO_".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let text = describe_best_move(&board, Mark::O, Difficulty::Hard, &mut rng).unwrap();
        assert!(text.starts_with("O (hard) plays Bottom-right at (3,3), index 8"), "{text}");
    }

    #[test]
    fn test_describe_best_move_on_full_board_fails() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(describe_best_move(&board, Mark::X, Difficulty::Hard, &mut rng).is_err());
    }
}
