//! Move log with branch-on-write truncation and rollback
//!
//! The log is the source of truth for a game. The first `cursor` entries are
//! the live line of play; entries beyond the cursor are a rolled-back future
//! that survives until a new move branches over it. The grid is always the
//! rendering of the live prefix, never edited in place.

use serde::{Deserialize, Serialize};

use super::board::{Coord, Grid, Move, Player};
use super::rules;

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
}

/// What a successful play changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayReport {
    /// Index of the move that was just recorded
    pub last_move_index: usize,
    /// Whether that move decided the game
    pub is_over: bool,
    /// The winning player, when decided
    pub winner: Option<Player>,
}

/// The state visible after a rollback: the re-rendered board and whose turn
/// it is
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub grid: Grid,
    pub to_move: Player,
    pub is_over: bool,
    pub winner: Option<Player>,
}

/// A game history: recorded moves plus the cursor marking the live prefix
///
/// All game-flow rules live here: turn alternation by move parity, play
/// rejection, win bookkeeping, and rollback. Construct one through
/// [`crate::GameSession`], which validates the dimensions first.
#[derive(Debug, Clone)]
pub struct History {
    size: usize,
    win_length: usize,
    moves: Vec<Move>,
    cursor: usize,
    grid: Grid,
    winner: Option<Player>,
}

impl History {
    /// Create an empty history for a `size` x `size` board
    pub fn new(size: usize, win_length: usize) -> Self {
        History {
            size,
            win_length,
            moves: Vec::new(),
            cursor: 0,
            grid: Grid::empty(size),
            winner: None,
        }
    }

    /// Record a placement at `coord` for whichever player the parity says is
    /// up
    ///
    /// Any rolled-back future beyond the cursor is discarded first: the new
    /// log is `moves[0..cursor] ++ [move]`, built as a fresh sequence rather
    /// than an in-place edit. The grid is re-rendered from the new prefix and
    /// the winner is re-derived from the placed move alone.
    ///
    /// # Errors
    ///
    /// Rejected, with the history untouched, when the game is already won,
    /// the board is full, `coord` is off the board, or the cell is occupied
    /// (checked in that order).
    pub fn play(&mut self, coord: Coord) -> crate::Result<PlayReport> {
        if self.winner.is_some() {
            return Err(crate::Error::GameOver);
        }
        if self.cursor == self.grid.cell_count() {
            return Err(crate::Error::BoardFull { moves: self.cursor });
        }
        if !self.grid.in_bounds(coord.row as i64, coord.col as i64) {
            return Err(crate::Error::OutOfBounds {
                row: coord.row,
                col: coord.col,
                size: self.size,
            });
        }
        if !self.grid.is_empty_at(coord) {
            return Err(crate::Error::CellOccupied {
                row: coord.row,
                col: coord.col,
            });
        }

        let mv = Move::new(coord, Player::for_index(self.cursor));
        self.moves = branched(&self.moves, self.cursor, mv);
        self.cursor = self.moves.len();
        self.grid = Grid::render(self.size, &self.moves);
        self.winner = rules::winner_at_tip(&self.grid, &self.moves, self.win_length);

        Ok(PlayReport {
            last_move_index: self.cursor - 1,
            is_over: self.winner.is_some(),
            winner: self.winner,
        })
    }

    /// Move the cursor to `index` and re-derive everything from that prefix
    ///
    /// `index` ranges over `0..=moves.len()`; rolling forward to a recorded
    /// future is as legal as rolling back. The log itself is never truncated
    /// here; only a subsequent [`History::play`] discards the suffix. The
    /// game-over state is re-checked only when `index` lands on the tip of
    /// the log; any interior index clears it.
    ///
    /// # Errors
    ///
    /// Rejected, with the history untouched, when `index` exceeds the number
    /// of recorded moves.
    pub fn rollback(&mut self, index: usize) -> crate::Result<Snapshot> {
        if index > self.moves.len() {
            return Err(crate::Error::RollbackOutOfRange {
                index,
                recorded: self.moves.len(),
            });
        }

        self.cursor = index;
        self.grid = Grid::render(self.size, &self.moves[..index]);
        self.winner = if index == self.moves.len() {
            rules::winner_at_tip(&self.grid, &self.moves[..index], self.win_length)
        } else {
            None
        };

        Ok(self.snapshot())
    }

    /// The full recorded log, including any rolled-back suffix
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Length of the live prefix
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The board rendered from the live prefix
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The winning player, if the live tip decided the game
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Whether the game is decided by a win
    ///
    /// A full, winnerless board is a draw but deliberately does not set this
    /// flag; [`History::outcome`] reports the draw.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Whether the live prefix fills the board
    pub fn is_full(&self) -> bool {
        self.cursor == self.grid.cell_count()
    }

    /// The player who places the next move
    pub fn to_move(&self) -> Player {
        Player::for_index(self.cursor)
    }

    /// Win, draw, or `None` while the game is still open
    pub fn outcome(&self) -> Option<Outcome> {
        match self.winner {
            Some(player) => Some(Outcome::Win(player)),
            None if self.is_full() => Some(Outcome::Draw),
            None => None,
        }
    }

    /// Snapshot of the live state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            to_move: self.to_move(),
            is_over: self.is_over(),
            winner: self.winner,
        }
    }
}

/// The branch-on-write update: `moves[0..cursor] ++ [mv]` as a new sequence
fn branched(moves: &[Move], cursor: usize, mv: Move) -> Vec<Move> {
    let mut next: Vec<Move> = moves[..cursor].to_vec();
    next.push(mv);
    next
}
