//! Generalized m,n,k game implementation

pub mod board;
pub mod history;
pub mod rules;
pub mod session;

pub use board::{Cell, Coord, Grid, Move, Player};
pub use history::{History, Outcome, PlayReport, Snapshot};
pub use rules::{SCAN_AXES, is_winning_placement, winner_at_tip};
pub use session::{GameSession, GameStatus};
