//! Play session: menus, games, scoreboard, and the play-again loop.

use crate::config::AppConfig;
use crate::console::{Terminal, ask_number, ask_yes_no};
use crate::mode::PlayMode;
use crate::orchestrator::{GameOutcome, Orchestrator};
use crate::players::{EnginePlayer, HumanPlayer, Player};
use crate::render::BoardRenderer;
use crate::scoreboard::Scoreboard;
use anyhow::Result;
use strictly_tictactoe::{Difficulty, Player as Mark};
use strum::IntoEnumIterator;
use tracing::{info, instrument};

/// A sequence of games sharing one scoreboard.
#[derive(Debug)]
pub struct Session {
    config: AppConfig,
    scoreboard: Scoreboard,
    games_played: u64,
}

impl Session {
    /// Creates a session with an empty scoreboard.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            scoreboard: Scoreboard::new(),
            games_played: 0,
        }
    }

    /// Scores so far.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Plays games until the user declines another.
    ///
    /// # Errors
    ///
    /// Propagates terminal errors, including
    /// [`InputClosed`](crate::console::InputClosed) when input runs out.
    #[instrument(skip_all)]
    pub fn run(&mut self, term: &mut dyn Terminal) -> Result<()> {
        term.write_line("Welcome – press Ctrl+C to quit at any time.")?;
        loop {
            self.play_round(term)?;
            if !ask_yes_no(term, "Play again? (y/n): ")? {
                info!(scoreboard = %self.scoreboard, "Session finished");
                return Ok(());
            }
        }
    }

    /// Plays one game, asking for whatever the config leaves open.
    #[instrument(skip_all, fields(game = self.games_played + 1))]
    pub fn play_round(&mut self, term: &mut dyn Terminal) -> Result<GameOutcome> {
        let mode = match *self.config.mode() {
            Some(mode) => mode,
            None => ask_mode(term)?,
        };
        let difficulty = match *self.config.difficulty() {
            Some(difficulty) => difficulty,
            None => ask_difficulty(term)?,
        };
        info!(%mode, %difficulty, "Round configured");

        let (player_x, player_o) = self.seat_players(mode, difficulty);
        let renderer = BoardRenderer::new(*self.config.color());
        let outcome = Orchestrator::new(player_x, player_o, renderer).run(term)?;
        self.games_played += 1;

        match mode.human_mark() {
            Some(human) => {
                let verdict = self.scoreboard.record(*outcome.winner(), human);
                term.write_line(verdict.message())?;
                term.write_line("")?;
                term.write_line(&self.scoreboard.to_string())?;
            }
            None => match outcome.winner() {
                Some(mark) => term.write_line(&format!("AI playing '{mark}' wins."))?,
                None => term.write_line("It's a draw (AI vs AI).")?,
            },
        }
        Ok(outcome)
    }

    fn engine(&self, difficulty: Difficulty, mark: Mark) -> EnginePlayer {
        match *self.config.seed() {
            // One stream per seat and per game.
            Some(seed) => {
                let seat = match mark {
                    Mark::X => 0,
                    Mark::O => 1,
                };
                EnginePlayer::seeded(difficulty, seed ^ (self.games_played << 1 | seat))
            }
            None => EnginePlayer::new(difficulty),
        }
    }

    fn seat_players(
        &self,
        mode: PlayMode,
        difficulty: Difficulty,
    ) -> (Box<dyn Player>, Box<dyn Player>) {
        let human = || Box::new(HumanPlayer::new("You")) as Box<dyn Player>;
        let engine = |mark| Box::new(self.engine(difficulty, mark)) as Box<dyn Player>;
        match mode {
            PlayMode::PlayAsX => (human(), engine(Mark::O)),
            PlayMode::PlayAsO => (engine(Mark::X), human()),
            PlayMode::Watch => (engine(Mark::X), engine(Mark::O)),
        }
    }
}

/// Shows the mode menu and returns the pick.
pub fn ask_mode(term: &mut dyn Terminal) -> Result<PlayMode> {
    term.write_line("=== Tic-Tac-Toe ===")?;
    for (idx, mode) in PlayMode::ALL.iter().enumerate() {
        term.write_line(&format!("{}. {}", idx + 1, mode.label()))?;
    }
    let choice = ask_number(term, "Select: ", 1..=PlayMode::ALL.len() as u32)?;
    Ok(PlayMode::ALL[choice as usize - 1])
}

/// Shows the difficulty menu and returns the pick.
pub fn ask_difficulty(term: &mut dyn Terminal) -> Result<Difficulty> {
    let levels: Vec<Difficulty> = Difficulty::iter().collect();
    term.write_line("")?;
    term.write_line("AI difficulty:")?;
    for (idx, level) in levels.iter().enumerate() {
        term.write_line(&format!("{}. {}", idx + 1, level.label()))?;
    }
    let choice = ask_number(term, "Select: ", 1..=levels.len() as u32)?;
    Ok(levels[choice as usize - 1])
}
