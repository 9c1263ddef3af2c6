//! Win detection anchored at the most recent placement
//!
//! A placement can only create an alignment that passes through its own cell,
//! so the detector walks outward from that cell along four undirected axes
//! instead of rescanning the whole board. Each walk is capped at
//! `win_length - 1` steps, keeping the check O(win_length) per axis no matter
//! how large the board is.

use super::board::{Cell, Coord, Grid, Move, Player};

/// The four undirected scan axes: horizontal, vertical, and both diagonals
///
/// Each `(dr, dc)` is walked in both orientations, so these four cover all
/// eight compass directions.
pub const SCAN_AXES: [(i64, i64); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Check whether the mark just placed at `origin` completed an alignment
///
/// The grid must already contain the placement. For each axis the run length
/// is `1 + forward + backward` steps of matching cells; the placement wins
/// iff any run reaches `win_length`. An empty `origin` never wins, and a
/// `win_length` larger than the board simply never fires.
pub fn is_winning_placement(grid: &Grid, origin: Coord, win_length: usize) -> bool {
    let cell = grid.get(origin);
    if cell == Cell::Empty {
        return false;
    }

    SCAN_AXES.iter().any(|&(dr, dc)| {
        let forward = run_beyond(grid, origin, cell, (dr, dc), win_length);
        let backward = run_beyond(grid, origin, cell, (-dr, -dc), win_length);
        1 + forward + backward >= win_length
    })
}

/// The winner implied by the final move of `moves`, if that move won
///
/// `grid` must be the rendering of `moves`. Only the tip is examined: every
/// earlier move already passed through this check when it was played, so a
/// winner can only have appeared with the last placement.
pub fn winner_at_tip(grid: &Grid, moves: &[Move], win_length: usize) -> Option<Player> {
    let last = moves.last()?;
    if is_winning_placement(grid, last.coord, win_length) {
        Some(last.player)
    } else {
        None
    }
}

/// Count matching cells strictly beyond `origin` along `step`
///
/// Stops at the board edge, at the first non-matching cell, or after
/// `win_length - 1` steps, whichever comes first.
fn run_beyond(
    grid: &Grid,
    origin: Coord,
    cell: Cell,
    step: (i64, i64),
    win_length: usize,
) -> usize {
    let limit = win_length.saturating_sub(1);
    let mut count = 0;
    let mut row = origin.row as i64 + step.0;
    let mut col = origin.col as i64 + step.1;

    while count < limit
        && grid.in_bounds(row, col)
        && grid.get(Coord::new(row as usize, col as usize)) == cell
    {
        count += 1;
        row += step.0;
        col += step.1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_of(text: &str) -> Grid {
        Grid::from_rows(text).unwrap()
    }

    #[test]
    fn test_horizontal_win_detected_from_either_end() {
        // X X X
        // . O .
        // . O .
        let grid = grid_of("XXX\n.O.\n.O.");

        assert!(is_winning_placement(&grid, Coord::new(0, 0), 3));
        assert!(is_winning_placement(&grid, Coord::new(0, 2), 3));
    }

    #[test]
    fn test_win_detected_from_middle_of_run() {
        // O . .
        // O X .
        // O . X
        let grid = grid_of("O..\nOX.\nO.X");

        assert!(is_winning_placement(&grid, Coord::new(1, 0), 3));
    }

    #[test]
    fn test_diagonal_and_anti_diagonal_wins() {
        let main_diag = grid_of("X..\n.X.\n..X");
        let anti_diag = grid_of("..O\n.O.\nO..");

        assert!(is_winning_placement(&main_diag, Coord::new(1, 1), 3));
        assert!(is_winning_placement(&anti_diag, Coord::new(1, 1), 3));
    }

    #[test]
    fn test_run_short_of_win_length_does_not_fire() {
        // X X .
        // . . .
        // . . .
        let grid = grid_of("XX.\n...\n...");

        assert!(!is_winning_placement(&grid, Coord::new(0, 0), 3));
        assert!(!is_winning_placement(&grid, Coord::new(0, 1), 3));
    }

    #[test]
    fn test_opponent_cell_breaks_the_run() {
        // X O X
        // . . .
        // . . .
        let grid = grid_of("XOX\n...\n...");

        assert!(!is_winning_placement(&grid, Coord::new(0, 0), 2));
        assert!(!is_winning_placement(&grid, Coord::new(0, 2), 3));
    }

    #[test]
    fn test_win_length_one_fires_on_any_placement() {
        let grid = grid_of("X..\n...\n...");

        assert!(is_winning_placement(&grid, Coord::new(0, 0), 1));
    }

    #[test]
    fn test_win_length_beyond_board_never_fires() {
        // A fully aligned 3-run cannot satisfy win_length 4.
        let grid = grid_of("XXX\n.O.\n.O.");

        assert!(!is_winning_placement(&grid, Coord::new(0, 1), 4));
    }

    #[test]
    fn test_empty_origin_never_wins() {
        let grid = grid_of("XX.\n...\n...");

        assert!(!is_winning_placement(&grid, Coord::new(0, 2), 3));
    }

    #[test]
    fn test_overlong_run_still_wins() {
        let mut text = String::new();
        for row in 0..7 {
            for col in 0..7 {
                text.push(if row == 3 && col != 6 { 'X' } else { '.' });
                if col < 6 {
                    text.push(' ');
                }
            }
            text.push('\n');
        }
        // Six in a row along row 3 of a 7x7 board, win length 5.
        let grid = grid_of(&text);

        assert!(is_winning_placement(&grid, Coord::new(3, 2), 5));
        assert!(is_winning_placement(&grid, Coord::new(3, 5), 5));
    }

    #[test]
    fn test_scan_never_leaves_the_board_at_corners() {
        let grid = grid_of("X..\n...\n...");

        // All four axes clip at the corner without panicking.
        assert!(!is_winning_placement(&grid, Coord::new(0, 0), 3));
    }

    #[test]
    fn test_winner_at_tip_reports_last_mover_only() {
        let moves = vec![
            Move::new(Coord::new(0, 0), Player::X),
            Move::new(Coord::new(1, 0), Player::O),
            Move::new(Coord::new(0, 1), Player::X),
            Move::new(Coord::new(1, 1), Player::O),
            Move::new(Coord::new(0, 2), Player::X),
        ];
        let grid = Grid::render(3, &moves);
        let before_win = Grid::render(3, &moves[..4]);

        assert_eq!(winner_at_tip(&grid, &moves, 3), Some(Player::X));
        assert_eq!(winner_at_tip(&before_win, &moves[..4], 3), None);
        assert_eq!(winner_at_tip(&Grid::empty(3), &[], 3), None);
    }
}
