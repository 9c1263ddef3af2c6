//! m,n,k-game engine: square boards, k-in-a-row rules, and a minimax player
//!
//! This crate provides:
//! - Board model rendered from a replayable move log
//! - Win detection scanned locally around the last placement
//! - Game history with rollback and branch-on-write truncation
//! - Depth-limited alpha-beta search with a heuristic line evaluation
//! - A session facade wiring one validated configuration through all of it
//!
//! ```
//! use mnkgame::{GameConfig, GameSession};
//!
//! # fn main() -> mnkgame::Result<()> {
//! let mut session = GameSession::new(GameConfig::tic_tac_toe())?;
//! session.play(0, 0)?;
//! let (reply, _) = session.engine_move()?;
//! assert_ne!((reply.row, reply.col), (0, 0));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod search;

pub use config::{GameConfig, TokenPair, MAX_BOARD_SIZE};
pub use error::{Error, Result};
pub use game::{
    Cell, Coord, GameSession, GameStatus, Grid, History, Move, Outcome, PlayReport, Player,
    Snapshot, is_winning_placement,
};
pub use search::{Scratch, SearchOptions, Weights, choose_move, evaluate};
