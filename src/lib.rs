//! Console tic-tac-toe against the `strictly_tictactoe` search engine.
//!
//! # Architecture
//!
//! - **Console**: line-based terminal shared by menus and players
//! - **Players**: humans typing squares and engine players at a difficulty
//! - **Orchestrator**: runs one game on a fresh board, X first
//! - **Session**: menus, scoreboard, and the play-again loop
//! - **Analysis**: offline reports comparing pruned and exhaustive search
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use strictly_minimax::{BoardRenderer, Console, EnginePlayer, Orchestrator};
//! use strictly_tictactoe::Difficulty;
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut console = Console::new(Cursor::new(Vec::new()), Vec::new());
//! let mut game = Orchestrator::new(
//!     Box::new(EnginePlayer::new(Difficulty::Hard)),
//!     Box::new(EnginePlayer::new(Difficulty::Hard)),
//!     BoardRenderer::new(false),
//! );
//! let outcome = game.run(&mut console)?;
//! assert_eq!(*outcome.winner(), None);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod config;
mod console;
mod mode;
mod orchestrator;
mod players;
mod render;
mod scoreboard;
mod session;

pub use analysis::{Analysis, analyze, describe_best_move};
pub use config::{AppConfig, ConfigError, ConfigErrorKind, DEFAULT_CONFIG_FILE};
pub use console::{Console, InputClosed, Terminal, ask_number, ask_yes_no};
pub use mode::PlayMode;
pub use orchestrator::{GameOutcome, Orchestrator};
pub use players::{EnginePlayer, HumanPlayer, Player};
pub use render::{BoardRenderer, group_thousands};
pub use scoreboard::{Scoreboard, Verdict};
pub use session::{Session, ask_difficulty, ask_mode};
