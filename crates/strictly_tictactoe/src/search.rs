//! Minimax search with alpha-beta pruning.
//!
//! The search mutates the board it is given: each candidate mark is placed,
//! searched, and cleared again before the next sibling is looked at, so the
//! board is back to its original contents on every return path.

use crate::{Board, DRAW, Player, Score, Square, evaluate, is_full};

/// Initial alpha, below any reachable score.
pub const ALPHA_FLOOR: Score = -2;
/// Initial beta, above any reachable score.
pub const BETA_CEILING: Score = 2;

/// Score of a searched subtree and the number of nodes it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Minimax value from X's point of view.
    pub score: Score,
    /// Nodes visited, counting the root of the subtree.
    pub nodes: u64,
}

impl SearchResult {
    fn leaf(score: Score) -> Self {
        Self { score, nodes: 1 }
    }
}

/// Worst possible value for the side to move.
fn initial_best(to_move: Player) -> Score {
    match to_move {
        Player::X => ALPHA_FLOOR,
        Player::O => BETA_CEILING,
    }
}

/// True when the node is a leaf: decided, full, or out of depth.
fn is_leaf(board: &Board, score: Score, depth: Option<u32>) -> bool {
    score != DRAW || is_full(board) || depth == Some(0)
}

/// Minimax with alpha-beta pruning.
///
/// X maximizes and O minimizes. Children are tried in ascending index order
/// and the loop stops as soon as `beta <= alpha` (fail-hard). `depth` is the
/// number of plies still allowed below this node; `None` searches to the end
/// of the game. Pass [`ALPHA_FLOOR`] and [`BETA_CEILING`] at the root.
///
/// The board is mutated during the call and restored before it returns.
pub fn search(
    board: &mut Board,
    to_move: Player,
    mut alpha: Score,
    mut beta: Score,
    depth: Option<u32>,
) -> SearchResult {
    let terminal = evaluate(board);
    if is_leaf(board, terminal, depth) {
        return SearchResult::leaf(terminal);
    }

    let mut best = initial_best(to_move);
    let mut nodes = 1;
    let child_depth = depth.map(|d| d - 1);

    for pos in crate::Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }

        board.set(pos, Square::Occupied(to_move));
        let child = search(board, to_move.opponent(), alpha, beta, child_depth);
        board.set(pos, Square::Empty);

        nodes += child.nodes;
        match to_move {
            Player::X => {
                best = best.max(child.score);
                alpha = alpha.max(best);
            }
            Player::O => {
                best = best.min(child.score);
                beta = beta.min(best);
            }
        }
        if beta <= alpha {
            break;
        }
    }

    SearchResult { score: best, nodes }
}

/// Plain minimax over the same tree, without pruning.
///
/// Same leaf rule and move order as [`search`]. Used to measure what pruning
/// saves; the score always matches [`search`] from the root bounds.
pub fn minimax_exhaustive(board: &mut Board, to_move: Player, depth: Option<u32>) -> SearchResult {
    let terminal = evaluate(board);
    if is_leaf(board, terminal, depth) {
        return SearchResult::leaf(terminal);
    }

    let mut best = initial_best(to_move);
    let mut nodes = 1;
    let child_depth = depth.map(|d| d - 1);

    for pos in crate::Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }

        board.set(pos, Square::Occupied(to_move));
        let child = minimax_exhaustive(board, to_move.opponent(), child_depth);
        board.set(pos, Square::Empty);

        nodes += child.nodes;
        best = match to_move {
            Player::X => best.max(child.score),
            Player::O => best.min(child.score),
        };
    }

    SearchResult { score: best, nodes }
}
