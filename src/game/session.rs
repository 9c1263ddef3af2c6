//! Game session: one configured game from first move to verdict
//!
//! [`GameSession`] ties a validated [`GameConfig`] to a [`History`] and the
//! search engine. It is the only construction path the crate exposes, so
//! every live game is known to satisfy the configuration rules.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::game::history::{History, Outcome, PlayReport, Snapshot};
use crate::game::{Coord, Grid, Move, Player};
use crate::search;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress { to_move: Player },
    Won { winner: Player },
    Drawn,
}

/// A configured game in progress
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    history: History,
}

impl GameSession {
    /// Start a fresh game under `config`
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` when the configuration fails
    /// [`GameConfig::validate`].
    pub fn new(config: GameConfig) -> crate::Result<Self> {
        config.validate()?;
        let history = History::new(config.size, config.win_length);
        Ok(GameSession { config, history })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Place a move at `(row, col)` for whichever side is up
    ///
    /// # Errors
    ///
    /// Forwards the rejection rules of [`History::play`].
    pub fn play(&mut self, row: usize, col: usize) -> crate::Result<PlayReport> {
        self.history.play(Coord::new(row, col))
    }

    /// Play `moves` in order, stopping at the first rejection
    ///
    /// Moves already accepted stay on the log; the failed one leaves no
    /// trace.
    ///
    /// # Errors
    ///
    /// Forwards the rejection rules of [`History::play`].
    pub fn play_sequence(
        &mut self,
        moves: impl IntoIterator<Item = (usize, usize)>,
    ) -> crate::Result<()> {
        for (row, col) in moves {
            self.play(row, col)?;
        }
        Ok(())
    }

    /// Rewind (or fast-forward) the live prefix to `index` moves
    ///
    /// # Errors
    ///
    /// Forwards the range check of [`History::rollback`].
    pub fn rollback(&mut self, index: usize) -> crate::Result<Snapshot> {
        self.history.rollback(index)
    }

    /// Search for the engine's move and play it
    ///
    /// The engine side comes from the configuration's `engine_opens` flag.
    ///
    /// # Errors
    ///
    /// Returns `GameOver` when the game is decided, `EngineOutOfTurn` when
    /// the parity says the other side is up, and `NoLegalMove` on a full
    /// board.
    pub fn engine_move(&mut self) -> crate::Result<(Coord, PlayReport)> {
        if self.history.is_over() {
            return Err(crate::Error::GameOver);
        }
        let engine = self.config.engine_player();
        let to_move = self.history.to_move();
        if engine != to_move {
            return Err(crate::Error::EngineOutOfTurn { engine, to_move });
        }

        let coord = search::choose_move(
            self.history.grid(),
            engine,
            self.config.win_length,
            &self.config.search,
        )?;
        let report = self.history.play(coord)?;
        Ok((coord, report))
    }

    pub fn grid(&self) -> &Grid {
        self.history.grid()
    }

    /// The live line of play
    pub fn moves(&self) -> &[Move] {
        &self.history.moves()[..self.history.cursor()]
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn to_move(&self) -> Player {
        self.history.to_move()
    }

    pub fn winner(&self) -> Option<Player> {
        self.history.winner()
    }

    /// The configured label of the winning side, if decided
    pub fn winner_label(&self) -> Option<&str> {
        self.history
            .winner()
            .map(|player| self.config.tokens.label(player))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.history.outcome()
    }

    pub fn status(&self) -> GameStatus {
        match self.history.outcome() {
            Some(Outcome::Win(winner)) => GameStatus::Won { winner },
            Some(Outcome::Draw) => GameStatus::Drawn,
            None => GameStatus::InProgress {
                to_move: self.history.to_move(),
            },
        }
    }

    /// One-line status using the configured token labels
    pub fn status_line(&self) -> String {
        match self.status() {
            GameStatus::InProgress { to_move } => {
                format!("next: {}", self.config.tokens.label(to_move))
            }
            GameStatus::Won { winner } => {
                format!("winner: {}", self.config.tokens.label(winner))
            }
            GameStatus::Drawn => "draw".to_string(),
        }
    }
}
