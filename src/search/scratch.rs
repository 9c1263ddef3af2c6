//! Shared mutate-then-undo buffer for speculative search
//!
//! The search explores by mutating one board and undoing each placement on
//! the way back up. [`Scratch::with_placement`] makes the undo structural:
//! the placement exists only for the duration of the closure, so a forgotten
//! restore cannot be written.

use crate::game::{Cell, Coord, Grid};

/// A board the search is allowed to scribble on
///
/// Constructed from a clone of the caller's grid, so nothing the search does
/// is observable outside it.
#[derive(Debug)]
pub struct Scratch {
    grid: Grid,
}

impl Scratch {
    pub fn new(grid: Grid) -> Self {
        Scratch { grid }
    }

    /// The board as currently explored
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Place `cell` at `at`, run `explore`, then remove the placement again
    ///
    /// The closure receives the scratch itself, so exploration can nest
    /// further placements. Whatever the closure returns is passed through
    /// after the cell is cleared.
    pub fn with_placement<T>(
        &mut self,
        at: Coord,
        cell: Cell,
        explore: impl FnOnce(&mut Self) -> T,
    ) -> T {
        debug_assert!(
            self.grid.is_empty_at(at),
            "speculative placement on occupied cell {at}"
        );
        self.grid.place(at, cell);
        let result = explore(self);
        self.grid.clear(at);
        result
    }
}
