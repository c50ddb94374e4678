//! Application configuration.

use crate::mode::PlayMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tictactoe::Difficulty;
use tracing::{debug, info, instrument};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_minimax.toml";

/// Settings for a play session.
///
/// `mode` and `difficulty` are optional: when unset, the session asks for
/// them through the menus before each game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Fixed play mode, skipping the mode menu.
    #[serde(default)]
    mode: Option<PlayMode>,

    /// Fixed AI difficulty, skipping the difficulty menu.
    #[serde(default)]
    difficulty: Option<Difficulty>,

    /// Colour marks on the board.
    #[serde(default = "default_color")]
    color: bool,

    /// Seed for Easy's random moves; fresh entropy when unset.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_color() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: None,
            difficulty: None,
            color: default_color(),
            seed: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(ConfigErrorKind::Read {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(ConfigErrorKind::Parse {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
        })?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `explicit` if given, otherwise [`DEFAULT_CONFIG_FILE`] if it
    /// exists, otherwise defaults.
    ///
    /// # Errors
    ///
    /// An explicit path must exist and parse; a present default file must
    /// parse.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of the file settings.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        mode: Option<PlayMode>,
        difficulty: Option<Difficulty>,
        no_color: bool,
        seed: Option<u64>,
    ) -> Self {
        if mode.is_some() {
            self.mode = mode;
        }
        if difficulty.is_some() {
            self.difficulty = difficulty;
        }
        if no_color {
            self.color = false;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

/// Why a config file was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// The file could not be read.
    #[display("cannot read {path}: {reason}")]
    Read {
        /// Path that was tried.
        path: String,
        /// Underlying I/O failure.
        reason: String,
    },

    /// The file is not valid TOML for [`AppConfig`].
    #[display("cannot parse {path}: {reason}")]
    Parse {
        /// Path that was read.
        path: String,
        /// Parser message.
        reason: String,
    },
}

/// Config file error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", kind, file, line)]
pub struct ConfigError {
    /// Error kind.
    pub kind: ConfigErrorKind,
    /// Line where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl ConfigError {
    /// Wraps `kind` with the caller's location.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
