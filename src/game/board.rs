//! Board representation: cells, players, and the grid rendered from a move list
//!
//! The grid is derived state. The move list owned by the history module is the
//! source of truth, and [`Grid::render`] rebuilds the board from any prefix of
//! it. Query methods are total over signed coordinates so that directional
//! scans may probe one step past an edge without pre-checking.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player occupying this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

/// A player in the game
///
/// `Player::X` always denotes the side that moves on even move indices,
/// regardless of the token labels a configuration displays for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// The player who places the move at `index` in a game history
    ///
    /// ```
    /// use mnkgame::game::Player;
    ///
    /// assert_eq!(Player::for_index(0), Player::X);
    /// assert_eq!(Player::for_index(1), Player::O);
    /// assert_eq!(Player::for_index(6), Player::X);
    /// ```
    pub fn for_index(index: usize) -> Player {
        if index % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A board coordinate, `(row, col)`, both zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A recorded placement: where, and by whom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub coord: Coord,
    pub player: Player,
}

impl Move {
    pub fn new(coord: Coord, player: Player) -> Self {
        Move { coord, player }
    }
}

/// A square board of side `size`, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty grid
    pub fn empty(size: usize) -> Self {
        Grid {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Render a grid by applying `moves` in order to an all-empty board
    ///
    /// This is the only way board state comes into existence: the history
    /// module re-renders from a move prefix rather than editing a grid in
    /// place, so a grid can always be cross-checked against the moves that
    /// produced it.
    pub fn render(size: usize, moves: &[Move]) -> Self {
        let mut grid = Grid::empty(size);
        for mv in moves {
            grid.place(mv.coord, mv.player.to_cell());
        }
        grid
    }

    /// Parse a grid from one text row per line, cells `X`/`O`/`.`
    ///
    /// Whitespace inside a row is ignored, so both `X.O` and `X . O` parse.
    /// The board must be square: every row needs as many cells as there are
    /// non-empty lines.
    ///
    /// # Errors
    ///
    /// Returns an error when the text is empty, a row length disagrees with
    /// the row count, or a character is not a recognized cell.
    pub fn from_rows(text: &str) -> crate::Result<Self> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect())
            .filter(|row: &Vec<char>| !row.is_empty())
            .collect();

        let size = rows.len();
        if size == 0 {
            return Err(crate::Error::InvalidRowCount {
                got: 0,
                expected: 1,
            });
        }

        let mut grid = Grid::empty(size);
        for (row, chars) in rows.iter().enumerate() {
            if chars.len() != size {
                return Err(crate::Error::InvalidRowLength {
                    row,
                    got: chars.len(),
                    expected: size,
                });
            }
            for (col, &c) in chars.iter().enumerate() {
                let cell = Cell::from_char(c).ok_or(crate::Error::InvalidCellCharacter {
                    character: c,
                    row,
                    col,
                })?;
                grid.place(Coord::new(row, col), cell);
            }
        }
        Ok(grid)
    }

    /// Board side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells, `size * size`
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether a signed coordinate lands on the board
    ///
    /// Takes signed values so callers stepping along a direction vector can
    /// probe past an edge and simply get `false` back.
    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// The cell at `coord`
    ///
    /// Out-of-bounds lookups are a programming error and panic; the play path
    /// validates coordinates before ever indexing.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[self.index_of(coord)]
    }

    /// Whether the cell at `coord` is unoccupied
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.get(coord) == Cell::Empty
    }

    /// All empty coordinates in row-major order
    ///
    /// Search relies on this ordering for its first-encountered tie-breaking.
    pub fn empty_coords(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Coord::new(i / self.size, i % self.size))
            .collect()
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    pub(crate) fn place(&mut self, coord: Coord, cell: Cell) {
        let i = self.index_of(coord);
        self.cells[i] = cell;
    }

    pub(crate) fn clear(&mut self, coord: Coord) {
        let i = self.index_of(coord);
        self.cells[i] = Cell::Empty;
    }

    fn index_of(&self, coord: Coord) -> usize {
        debug_assert!(
            self.in_bounds(coord.row as i64, coord.col as i64),
            "coordinate {coord} outside {0}x{0} board",
            self.size
        );
        coord.row * self.size + coord.col
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(Coord::new(row, col)).to_char())?;
            }
            if row + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
