//! Command-line interface for strictly_minimax.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_minimax::PlayMode;
use strictly_tictactoe::{Difficulty, Player};

/// Strictly Minimax - tic-tac-toe against an alpha-beta search engine
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Play tic-tac-toe against a minimax AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactive games in the terminal
    Play(PlayArgs),

    /// Print the engine's move for a board
    BestMove {
        /// Board text, e.g. "X__/_X_/OO_"
        board: String,

        /// Side to move (x or o)
        #[arg(short, long)]
        side: Player,

        /// AI difficulty (easy, medium, hard)
        #[arg(short, long, default_value = "hard")]
        difficulty: Difficulty,

        /// Seed for Easy's random pick
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Compare pruned and exhaustive search on a board
    Analyze {
        /// Board text, e.g. "X__/_X_/OO_"
        board: String,

        /// Side to move (x or o)
        #[arg(short, long)]
        side: Player,

        /// Plies to search below the root (unbounded if omitted)
        #[arg(long)]
        depth: Option<u32>,
    },
}

/// Options for interactive play
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Play as x, o, or watch AI vs AI (asks if omitted)
    #[arg(short, long)]
    pub mode: Option<PlayMode>,

    /// AI difficulty: easy, medium, hard (asks if omitted)
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Print the board without colour
    #[arg(long)]
    pub no_color: bool,

    /// Seed for Easy's random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
