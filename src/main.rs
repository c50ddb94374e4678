//! Strictly Minimax - Unified CLI
//!
//! Interactive tic-tac-toe plus offline position tools.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_minimax::{AppConfig, Console, InputClosed, Session, analyze, describe_best_move};
use strictly_tictactoe::{Board, Difficulty, Player};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => run_play(PlayArgs::default()),
        Some(Command::Play(args)) => run_play(args),
        Some(Command::BestMove {
            board,
            side,
            difficulty,
            seed,
        }) => run_best_move(&board, side, difficulty, seed),
        Some(Command::Analyze { board, side, depth }) => run_analyze(&board, side, depth),
    }
}

/// Run interactive games until the user quits
#[instrument(skip_all)]
fn run_play(args: PlayArgs) -> Result<()> {
    let config = AppConfig::load(args.config.as_deref())?.with_overrides(
        args.mode,
        args.difficulty,
        args.no_color,
        args.seed,
    );
    info!(?config, "Starting session");

    let mut console = Console::stdio();
    let mut session = Session::new(config);
    match session.run(&mut console) {
        Err(e) if e.downcast_ref::<InputClosed>().is_some() => {
            println!("\nBye!");
            Ok(())
        }
        other => other,
    }
}

/// Print the engine's pick for a board
fn run_best_move(board: &str, side: Player, difficulty: Difficulty, seed: Option<u64>) -> Result<()> {
    let board: Board = board.parse().context("Invalid board")?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    println!("{}", describe_best_move(&board, side, difficulty, &mut rng)?);
    Ok(())
}

/// Print pruned vs exhaustive search statistics
fn run_analyze(board: &str, side: Player, depth: Option<u32>) -> Result<()> {
    let board: Board = board.parse().context("Invalid board")?;
    println!("{}", analyze(&board, side, depth)?);
    Ok(())
}
