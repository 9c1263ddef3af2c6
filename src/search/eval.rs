//! Static positional evaluation
//!
//! Scores a board from one player's perspective by tallying occupied cells
//! per row, per column, and per main diagonal, ignoring blockers, then
//! rewarding longer tallies exponentially. Corner and center occupancy add
//! flat bonuses, and a tempo term nudges positions where one side dominates
//! a line outright. The result is `own score - rival score`, so the search
//! can maximize it directly.

use serde::{Deserialize, Serialize};

use crate::game::{Cell, Coord, Grid, Player};

/// Tunable evaluation weights
///
/// The defaults reproduce the classic tic-tac-toe tuning; none of them is a
/// correctness invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    /// Base of the exponential per-line reward (`base^count` per line)
    #[serde(default = "default_line_base")]
    pub line_base: f64,
    /// Flat bonus per occupied corner
    #[serde(default = "default_corner")]
    pub corner: f64,
    /// Flat bonus per occupied center cell
    #[serde(default = "default_center")]
    pub center: f64,
    /// Magnitude of the tempo adjustment
    #[serde(default = "default_tempo")]
    pub tempo: f64,
}

fn default_line_base() -> f64 {
    10.0
}

fn default_corner() -> f64 {
    5.0
}

fn default_center() -> f64 {
    10.0
}

fn default_tempo() -> f64 {
    50.0
}

impl Default for Weights {
    fn default() -> Self {
        Weights {
            line_base: default_line_base(),
            corner: default_corner(),
            center: default_center(),
            tempo: default_tempo(),
        }
    }
}

/// Per-line mark counts for one player, plus corner and center occupancy
///
/// `lines` holds the rows, then the columns, then the two main diagonals, so
/// two tallies can be compared line-for-line by position.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LineTally {
    lines: Vec<usize>,
    corners: usize,
    centers: usize,
}

/// Evaluate `grid` from `perspective`'s point of view
///
/// `configured_depth` is the search's full depth, whose parity decides which
/// side the tempo adjustment can favor (the side that places the final
/// searched move).
pub fn evaluate(
    grid: &Grid,
    perspective: Player,
    win_length: usize,
    configured_depth: usize,
    weights: &Weights,
) -> f64 {
    let mine = tally(grid, perspective.to_cell());
    let theirs = tally(grid, perspective.opponent().to_cell());
    let tempo = tempo_adjustment(&mine, &theirs, win_length, configured_depth, weights.tempo);

    line_score(&mine, weights) + tempo - line_score(&theirs, weights)
}

fn tally(grid: &Grid, target: Cell) -> LineTally {
    let size = grid.size();
    let mut lines = vec![0usize; 2 * size + 2];
    let mut corners = 0;
    let mut centers = 0;

    // Center is the middle cell for odd sizes, the middle 2x2 block for even.
    let center_lo = (size - 1) / 2;
    let center_hi = size / 2;

    for row in 0..size {
        for col in 0..size {
            if grid.get(Coord::new(row, col)) != target {
                continue;
            }
            lines[row] += 1;
            lines[size + col] += 1;
            if row == col {
                lines[2 * size] += 1;
            }
            if row + col == size - 1 {
                lines[2 * size + 1] += 1;
            }
            if (row == 0 || row == size - 1) && (col == 0 || col == size - 1) {
                corners += 1;
            }
            if (row == center_lo || row == center_hi) && (col == center_lo || col == center_hi) {
                centers += 1;
            }
        }
    }

    LineTally {
        lines,
        corners,
        centers,
    }
}

fn line_score(tally: &LineTally, weights: &Weights) -> f64 {
    let lines: f64 = tally
        .lines
        .iter()
        .map(|&count| weights.line_base.powi(count as i32))
        .sum();

    lines + weights.corner * tally.corners as f64 + weights.center * tally.centers as f64
}

/// Tempo nudge for a line one side dominates by at least `win_length - 1`
///
/// With an even configured depth the searching side places the horizon move,
/// so such a line earns `+tempo`; with an odd depth the horizon belongs to
/// the rival and a line it dominates costs `-tempo`.
fn tempo_adjustment(
    mine: &LineTally,
    theirs: &LineTally,
    win_length: usize,
    configured_depth: usize,
    tempo: f64,
) -> f64 {
    let threshold = win_length.saturating_sub(1) as i64;
    let mut diffs = mine
        .lines
        .iter()
        .zip(theirs.lines.iter())
        .map(|(&m, &t)| m as i64 - t as i64);

    if configured_depth % 2 == 0 {
        if diffs.any(|d| d >= threshold) {
            tempo
        } else {
            0.0
        }
    } else if diffs.any(|d| d <= -threshold) {
        -tempo
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_of(text: &str) -> Grid {
        Grid::from_rows(text).unwrap()
    }

    #[test]
    fn test_empty_board_is_balanced() {
        let grid = Grid::empty(3);
        let weights = Weights::default();

        assert_eq!(evaluate(&grid, Player::X, 3, 3, &weights), 0.0);
    }

    #[test]
    fn test_evaluation_is_antisymmetric_between_players() {
        let grid = grid_of("X..\n.O.\n..X");
        let weights = Weights::default();

        let for_x = evaluate(&grid, Player::X, 3, 3, &weights);
        let for_o = evaluate(&grid, Player::O, 3, 3, &weights);

        assert_eq!(for_x, -for_o);
    }

    #[test]
    fn test_longer_lines_score_exponentially() {
        let one = grid_of("X..\n...\n...");
        let two = grid_of("XX.\n...\n...");
        let weights = Weights::default();

        let s1 = evaluate(&one, Player::X, 3, 4, &weights);
        let s2 = evaluate(&two, Player::X, 3, 4, &weights);

        // Two on a row is worth far more than twice one on a row.
        assert!(s2 > 2.0 * s1);
    }

    #[test]
    fn test_center_outweighs_corner_outweighs_edge() {
        let center = grid_of("...\n.X.\n...");
        let corner = grid_of("X..\n...\n...");
        let edge = grid_of(".X.\n...\n...");
        let weights = Weights::default();

        let c = evaluate(&center, Player::X, 3, 4, &weights);
        let k = evaluate(&corner, Player::X, 3, 4, &weights);
        let e = evaluate(&edge, Player::X, 3, 4, &weights);

        assert!(c > k, "center {c} should beat corner {k}");
        assert!(k > e, "corner {k} should beat edge {e}");
    }

    #[test]
    fn test_center_block_for_even_sizes() {
        // On a 4x4 board all four middle cells count as center.
        let grid = grid_of("....\n.X..\n..X.\n....");
        let t = tally(&grid, Cell::X);

        assert_eq!(t.centers, 2);
    }

    #[test]
    fn test_tempo_penalizes_rival_dominated_line_only_at_odd_depth() {
        // O owns the main diagonal; every other line is contested evenly.
        let grid = grid_of("OX.\n.OX\nX.O");
        let weights = Weights::default();

        let even = evaluate(&grid, Player::X, 3, 2, &weights);
        let odd = evaluate(&grid, Player::X, 3, 3, &weights);

        // The odd-depth penalty is the only difference between the two.
        assert_eq!(even - odd, weights.tempo);
    }

    #[test]
    fn test_tempo_rewards_own_dominated_line_at_even_depth() {
        let grid = grid_of("XXX\nO..\n..O");
        let weights = Weights::default();

        let even = evaluate(&grid, Player::X, 3, 2, &weights);
        let odd = evaluate(&grid, Player::X, 3, 3, &weights);

        // At even depth the dominated row earns the tempo bonus; at odd depth
        // it cannot, and no rival line qualifies for the penalty.
        assert_eq!(even - odd, weights.tempo);
    }

    #[test]
    fn test_diagonal_membership() {
        let grid = grid_of("X...\n.X..\n..X.\n...X");
        let t = tally(&grid, Cell::X);

        // Main diagonal fully owned, anti-diagonal empty.
        assert_eq!(t.lines[8], 4);
        assert_eq!(t.lines[9], 0);
    }
}
