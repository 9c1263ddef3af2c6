//! The move chooser: win-in-one probing, then fixed-depth alpha-beta minimax
//!
//! Both tiers speculate on a [`Scratch`] clone of the caller's grid, so a
//! search never leaves a mark on the position it was asked about. Candidate
//! cells are always visited in row-major order and only a strictly better
//! score displaces the incumbent, which makes tie-breaking deterministic:
//! the first candidate of equal worth wins.

use serde::{Deserialize, Serialize};

use super::eval::{self, Weights};
use super::scratch::Scratch;
use crate::game::{Coord, Grid, Player, rules};

/// Default search depth in plies
pub const DEFAULT_DEPTH: usize = 3;

/// Default empty-cell count at or below which the win-in-one probe runs
pub const DEFAULT_WIN_IN_ONE_THRESHOLD: usize = 5;

/// Terminal score magnitude
///
/// Chosen to dominate any static evaluation a legal configuration can
/// produce: the largest supported board yields line scores around 4e20,
/// three orders of magnitude under this. Scaled by remaining depth so the
/// search prefers the earliest win it can force.
const WIN_SCORE: f64 = 1e24;

/// Tunable search parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Lookahead in plies
    #[serde(default = "default_depth")]
    pub depth: usize,
    /// Run the win-in-one probe when this few cells remain empty
    #[serde(default = "default_win_in_one_threshold")]
    pub win_in_one_threshold: usize,
    /// Evaluation weights
    #[serde(default)]
    pub weights: Weights,
}

fn default_depth() -> usize {
    DEFAULT_DEPTH
}

fn default_win_in_one_threshold() -> usize {
    DEFAULT_WIN_IN_ONE_THRESHOLD
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            depth: DEFAULT_DEPTH,
            win_in_one_threshold: DEFAULT_WIN_IN_ONE_THRESHOLD,
            weights: Weights::default(),
        }
    }
}

/// Score and originating move of a searched subtree
#[derive(Debug, Clone, Copy)]
struct Valued {
    score: f64,
    coord: Option<Coord>,
}

/// Everything the recursion needs but never changes
struct Ctx<'a> {
    engine: Player,
    win_length: usize,
    root_depth: usize,
    weights: &'a Weights,
}

/// Choose a move for `engine` on `grid`
///
/// When few enough cells remain, each empty cell is probed for an immediate
/// win first; otherwise (or when no probe wins) a depth-limited minimax with
/// alpha-beta pruning picks the best-scoring cell, breaking ties toward the
/// first row-major candidate. The caller's grid is never modified.
///
/// The caller is responsible for not asking about a board that already has a
/// winner; the search only rules on its own speculative placements.
///
/// # Errors
///
/// Returns [`crate::Error::NoLegalMove`] when the grid has no empty cell.
pub fn choose_move(
    grid: &Grid,
    engine: Player,
    win_length: usize,
    options: &SearchOptions,
) -> crate::Result<Coord> {
    let empties = grid.empty_coords();
    if empties.is_empty() {
        return Err(crate::Error::NoLegalMove);
    }

    let mut scratch = Scratch::new(grid.clone());

    if empties.len() <= options.win_in_one_threshold {
        if let Some(at) = immediate_win(&mut scratch, &empties, engine, win_length) {
            return Ok(at);
        }
    }

    let ctx = Ctx {
        engine,
        win_length,
        root_depth: options.depth,
        weights: &options.weights,
    };
    let best = minimax(
        &mut scratch,
        &ctx,
        options.depth,
        true,
        None,
        f64::NEG_INFINITY,
        f64::INFINITY,
    );

    best.coord.ok_or(crate::Error::NoLegalMove)
}

/// Probe each empty cell for an instant win, undoing every probe
fn immediate_win(
    scratch: &mut Scratch,
    empties: &[Coord],
    engine: Player,
    win_length: usize,
) -> Option<Coord> {
    empties.iter().copied().find(|&at| {
        scratch.with_placement(at, engine.to_cell(), |s| {
            rules::is_winning_placement(s.grid(), at, win_length)
        })
    })
}

/// Depth-limited minimax over the scratch buffer
///
/// `last` is the placement that created this node; if it completed an
/// alignment the node is terminal and scores `±WIN_SCORE * (depth + 1)`,
/// sign by whether the placer was the engine. Otherwise depth exhaustion and
/// full boards score statically, and interior nodes recurse with the usual
/// alpha-beta window, cutting off once `alpha >= beta`.
fn minimax(
    scratch: &mut Scratch,
    ctx: &Ctx<'_>,
    depth: usize,
    maximizing: bool,
    last: Option<Coord>,
    mut alpha: f64,
    mut beta: f64,
) -> Valued {
    if let Some(at) = last {
        if rules::is_winning_placement(scratch.grid(), at, ctx.win_length) {
            // The winning placement belongs to whichever side moved into
            // this node: the engine when this node minimizes, the rival
            // when it maximizes.
            let magnitude = WIN_SCORE * (depth as f64 + 1.0);
            let score = if maximizing { -magnitude } else { magnitude };
            return Valued { score, coord: None };
        }
    }

    let empties = scratch.grid().empty_coords();
    if depth == 0 || empties.is_empty() {
        let score = eval::evaluate(
            scratch.grid(),
            ctx.engine,
            ctx.win_length,
            ctx.root_depth,
            ctx.weights,
        );
        return Valued { score, coord: None };
    }

    let placing = if maximizing {
        ctx.engine
    } else {
        ctx.engine.opponent()
    };
    let mut best = Valued {
        score: if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        },
        coord: None,
    };

    for at in empties {
        let child = scratch.with_placement(at, placing.to_cell(), |s| {
            minimax(s, ctx, depth - 1, !maximizing, Some(at), alpha, beta)
        });

        let improved = if maximizing {
            child.score > best.score
        } else {
            child.score < best.score
        };
        if improved {
            best = Valued {
                score: child.score,
                coord: Some(at),
            };
        }

        if maximizing {
            alpha = alpha.max(best.score);
        } else {
            beta = beta.min(best.score);
        }
        if alpha >= beta {
            break;
        }
    }

    best
}
