//! Pure tic-tac-toe game logic and game-tree search.
//!
//! The crate has no knowledge of how moves are solicited or shown. Callers
//! hand it a [`Board`] and the side to move and get back a [`MoveChoice`].
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Position`], and the pure [`rules`] queries
//! - **Evaluation**: [`evaluate`] scores a board from X's point of view
//! - **Search**: [`search`] runs minimax with alpha-beta pruning and an
//!   optional depth limit
//! - **Move selection**: [`choose_move`] turns search results into a move
//!   according to a [`Difficulty`]
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{choose_move, Board, Difficulty, Player, Position};
//!
//! # fn example() -> Result<(), strictly_tictactoe::EngineError> {
//! let mut board: Board = "X__/_X_/OO_".parse()?;
//! let choice = choose_move(&mut board, Player::O, Difficulty::Hard)?;
//! assert_eq!(choice.position(), Position::BottomRight);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod difficulty;
mod error;
mod eval;
mod position;
pub mod rules;
mod search;
mod select;
mod types;

pub use action::Move;
pub use difficulty::Difficulty;
pub use error::{EngineError, EngineErrorKind};
pub use eval::{DRAW, O_WINS, Score, X_WINS, evaluate};
pub use position::Position;
pub use rules::{is_draw, is_full, is_won};
pub use search::{ALPHA_FLOOR, BETA_CEILING, SearchResult, minimax_exhaustive, search};
pub use select::{MoveChoice, choose_move, choose_move_with_rng};
pub use types::{Board, Player, Square};
