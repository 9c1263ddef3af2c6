//! Move selection: win-in-one probing plus fixed-depth alpha-beta minimax

pub mod engine;
pub mod eval;
pub mod scratch;

pub use engine::{DEFAULT_DEPTH, DEFAULT_WIN_IN_ONE_THRESHOLD, SearchOptions, choose_move};
pub use eval::{Weights, evaluate};
pub use scratch::Scratch;
