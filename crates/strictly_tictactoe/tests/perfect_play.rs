//! Whole-game tests of the difficulty tiers.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_tictactoe::{
    Board, Difficulty, Player, Position, Square, choose_move, choose_move_with_rng, is_full,
    is_won,
};

fn game_over(board: &Board) -> bool {
    is_won(board).is_some() || is_full(board)
}

fn engine_vs_engine(first: Player, x: Difficulty, o: Difficulty, rng: &mut StdRng) -> Board {
    let mut board = Board::new();
    let mut to_move = first;
    while !game_over(&board) {
        let difficulty = match to_move {
            Player::X => x,
            Player::O => o,
        };
        let choice = choose_move_with_rng(&mut board, to_move, difficulty, rng).unwrap();
        assert!(board.is_empty(choice.position()));
        board.set(choice.position(), Square::Occupied(to_move));
        to_move = to_move.opponent();
    }
    board
}

/// Plays every possible opponent line against Hard and returns how many
/// finished games were checked.
fn hard_survives_all_replies(board: &mut Board, to_move: Player, ai: Player) -> usize {
    if game_over(board) {
        assert_ne!(
            is_won(board),
            Some(ai.opponent()),
            "Hard lost as {ai} on {board}"
        );
        return 1;
    }

    if to_move == ai {
        let choice = choose_move(board, ai, Difficulty::Hard).unwrap();
        board.set(choice.position(), Square::Occupied(ai));
        let games = hard_survives_all_replies(board, ai.opponent(), ai);
        board.set(choice.position(), Square::Empty);
        games
    } else {
        let replies: Vec<Position> = board.empty_positions().collect();
        let mut games = 0;
        for pos in replies {
            board.set(pos, Square::Occupied(to_move));
            games += hard_survives_all_replies(board, ai, ai);
            board.set(pos, Square::Empty);
        }
        games
    }
}

#[test]
fn test_hard_vs_hard_is_a_draw_for_either_opener() {
    let mut rng = StdRng::seed_from_u64(0);
    for first in [Player::X, Player::O] {
        let board = engine_vs_engine(first, Difficulty::Hard, Difficulty::Hard, &mut rng);
        assert!(is_full(&board), "{board}");
        assert_eq!(is_won(&board), None, "{board}");
    }
}

#[test]
fn test_hard_never_loses_as_x() {
    let mut board = Board::new();
    let games = hard_survives_all_replies(&mut board, Player::X, Player::X);
    assert!(games > 0);
    assert_eq!(board, Board::new());
}

#[test]
fn test_hard_never_loses_as_o() {
    let mut board = Board::new();
    let games = hard_survives_all_replies(&mut board, Player::X, Player::O);
    assert!(games > 0);
    assert_eq!(board, Board::new());
}

#[test]
fn test_hard_never_loses_to_weaker_tiers() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..20 {
        for weaker in [Difficulty::Easy, Difficulty::Medium] {
            let board = engine_vs_engine(Player::X, weaker, Difficulty::Hard, &mut rng);
            assert_ne!(is_won(&board), Some(Player::X), "{board}");

            let board = engine_vs_engine(Player::X, Difficulty::Hard, weaker, &mut rng);
            assert_ne!(is_won(&board), Some(Player::O), "{board}");
        }
    }
}

#[test]
fn test_hard_punishes_medium_edge_reply() {
    let mut rng = StdRng::seed_from_u64(1);
    let board = engine_vs_engine(Player::X, Difficulty::Hard, Difficulty::Medium, &mut rng);
    assert_eq!(is_won(&board), Some(Player::X), "{board}");
}
