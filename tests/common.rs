//! Common test utilities for the mnkgame test suite.
//!
//! This module provides a brute-force win scan and a random-playout helper
//! used across multiple tests.

use mnkgame::{Cell, Coord, Grid, History, Player};
use rand::{prelude::IndexedRandom, rngs::StdRng};

/// Find a winner by checking every possible alignment on the board.
///
/// Unlike the engine's placement-anchored scan this walks all `win_length`
/// segments in all four directions from every cell, which makes it a slow
/// but obviously-correct reference.
///
/// # Returns
///
/// The owner of the first complete alignment found, or `None`.
pub fn brute_force_winner(grid: &Grid, win_length: usize) -> Option<Player> {
    let size = grid.size() as i64;
    let span = win_length as i64 - 1;

    for row in 0..size {
        for col in 0..size {
            let first = grid.get(Coord::new(row as usize, col as usize));
            if first == Cell::Empty {
                continue;
            }
            for (dr, dc) in [(0i64, 1i64), (1, 0), (1, 1), (-1, 1)] {
                if !grid.in_bounds(row + dr * span, col + dc * span) {
                    continue;
                }
                let aligned = (1..=span).all(|step| {
                    let r = (row + dr * step) as usize;
                    let c = (col + dc * step) as usize;
                    grid.get(Coord::new(r, c)) == first
                });
                if aligned {
                    return first.player();
                }
            }
        }
    }
    None
}

/// Play one uniformly random legal move.
///
/// # Returns
///
/// `false` when the game is already decided or the board is full, so a
/// playout loop can use this as its exit condition.
pub fn play_random_move(history: &mut History, rng: &mut StdRng) -> bool {
    if history.outcome().is_some() {
        return false;
    }
    let empties = history.grid().empty_coords();
    match empties.choose(rng) {
        Some(&at) => {
            history
                .play(at)
                .expect("random move on an empty cell is legal");
            true
        }
        None => false,
    }
}
