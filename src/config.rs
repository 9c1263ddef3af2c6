//! Game configuration: board dimensions, token labels, and search tuning
//!
//! One validated `GameConfig` drives every component the same way; nothing
//! else in the crate re-checks dimensions. Token labels are presentation
//! only; the rules always speak in terms of [`Player::X`] and [`Player::O`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::game::Player;
use crate::search::SearchOptions;

/// Largest supported board side
///
/// 19 covers every real gomoku board while keeping the evaluation's
/// exponential line scores comfortably inside `f64` ordering.
pub const MAX_BOARD_SIZE: usize = 19;

/// Display labels for the two sides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Label for the first mover
    pub first: String,
    /// Label for the second mover
    pub second: String,
}

impl TokenPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        TokenPair {
            first: first.into(),
            second: second.into(),
        }
    }

    /// The label shown for `player`
    pub fn label(&self, player: Player) -> &str {
        match player {
            Player::X => &self.first,
            Player::O => &self.second,
        }
    }
}

impl Default for TokenPair {
    fn default() -> Self {
        TokenPair::new("X", "O")
    }
}

/// Full rule set and tuning for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length
    pub size: usize,
    /// Aligned marks needed to win
    pub win_length: usize,
    /// Display labels for the two sides
    #[serde(default)]
    pub tokens: TokenPair,
    /// Search tuning
    #[serde(default)]
    pub search: SearchOptions,
    /// Whether the engine plays the first mover's side
    #[serde(default)]
    pub engine_opens: bool,
}

impl GameConfig {
    /// A validated configuration with default search tuning
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for dimensions or labels the engine
    /// cannot play; see [`GameConfig::validate`].
    pub fn new(size: usize, win_length: usize, tokens: TokenPair) -> crate::Result<Self> {
        let config = GameConfig {
            size,
            win_length,
            tokens,
            search: SearchOptions::default(),
            engine_opens: false,
        };
        config.validate()?;
        Ok(config)
    }

    /// Classic 3x3 tic-tac-toe, three in a row
    pub fn tic_tac_toe() -> Self {
        GameConfig {
            size: 3,
            win_length: 3,
            tokens: TokenPair::new("X", "O"),
            search: SearchOptions::default(),
            engine_opens: false,
        }
    }

    /// 15x15 gomoku, five in a row
    pub fn gomoku() -> Self {
        GameConfig {
            size: 15,
            win_length: 5,
            tokens: TokenPair::new("black", "white"),
            search: SearchOptions::default(),
            engine_opens: false,
        }
    }

    /// Read and validate a configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `Io` when the file cannot be read, `Serialization` when it is
    /// not valid JSON for a configuration, and `InvalidConfiguration` when
    /// the parsed values fail [`GameConfig::validate`].
    pub fn load(path: &Path) -> crate::Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config file {path:?}"),
            source,
        })?;
        let config: GameConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every configuration rule
    ///
    /// Deserialized configurations bypass [`GameConfig::new`], so anything
    /// that accepts one from outside should call this before using it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` when the size is zero or beyond
    /// [`MAX_BOARD_SIZE`], the win length is zero or exceeds the size, the
    /// token labels are empty or identical, the search depth is zero, or an
    /// evaluation weight is unusable.
    pub fn validate(&self) -> crate::Result<()> {
        if self.size == 0 {
            return Err(invalid("board size must be positive"));
        }
        if self.size > MAX_BOARD_SIZE {
            return Err(invalid(format!(
                "board size {} exceeds the supported maximum {MAX_BOARD_SIZE}",
                self.size
            )));
        }
        if self.win_length == 0 {
            return Err(invalid("win length must be positive"));
        }
        if self.win_length > self.size {
            return Err(invalid(format!(
                "win length {} cannot exceed board size {}",
                self.win_length, self.size
            )));
        }
        if self.tokens.first.is_empty() || self.tokens.second.is_empty() {
            return Err(invalid("token labels must be non-empty"));
        }
        if self.tokens.first == self.tokens.second {
            return Err(invalid(format!(
                "token labels must be distinct, got '{}' twice",
                self.tokens.first
            )));
        }
        if self.search.depth == 0 {
            return Err(invalid("search depth must be at least 1"));
        }
        let w = &self.search.weights;
        if ![w.line_base, w.corner, w.center, w.tempo]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(invalid("evaluation weights must be finite"));
        }
        if w.line_base <= 1.0 {
            return Err(invalid(format!(
                "line base {} must be greater than 1 for exponential line scoring",
                w.line_base
            )));
        }
        Ok(())
    }

    /// The side the engine plays
    pub fn engine_player(&self) -> Player {
        if self.engine_opens {
            Player::X
        } else {
            Player::O
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::tic_tac_toe()
    }
}

fn invalid(message: impl Into<String>) -> crate::Error {
    crate::Error::InvalidConfiguration {
        message: message.into(),
    }
}
