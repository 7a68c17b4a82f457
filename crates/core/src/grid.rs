//! Grid module - the immutable 4x4 board value
//!
//! The grid is a small `Copy` value. Every engine operation takes a grid and
//! returns a new one; nothing is mutated in place once a grid has been handed out.
//! Coordinates: (row, col) where row ranges 0..3 (top to bottom), col ranges 0..3
//! (left to right).

use std::fmt;

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::types::{Cell, CELL_COUNT, GRID_SIZE, MAX_TILE, WIN_TILE};

/// One row (or, after rotation, one column) of the grid
pub type Row = [Cell; GRID_SIZE];

/// Positions of empty cells in row-major order
pub type EmptyPositions = ArrayVec<(usize, usize), CELL_COUNT>;

/// Contract violations when building a grid from caller data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("expected {expected} rows, got {got}")]
    RowCount { expected: usize, got: usize },

    #[error("row {row} has {got} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error(
        "invalid tile {value} at ({row}, {col}): tiles must be powers of two from 2 to {max}",
        max = MAX_TILE
    )]
    InvalidTile { row: usize, col: usize, value: u32 },

    #[error("cell ({row}, {col}) is outside the {n}x{n} grid", n = GRID_SIZE)]
    OutOfBounds { row: usize, col: usize },
}

/// The game grid - 4 rows x 4 columns of optional tile values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    rows: [Row; GRID_SIZE],
}

/// True for powers of two in `2..=MAX_TILE`
#[inline]
pub fn is_valid_tile(value: u32) -> bool {
    (2..=MAX_TILE).contains(&value) && value.is_power_of_two()
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            rows: [[None; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Build a grid from rows, rejecting tiles that are not powers of two in `2..=MAX_TILE`
    pub fn from_rows(rows: [Row; GRID_SIZE]) -> Result<Self, GridError> {
        for (row, cells) in rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if let Some(value) = *cell {
                    if !is_valid_tile(value) {
                        return Err(GridError::InvalidTile { row, col, value });
                    }
                }
            }
        }
        Ok(Self { rows })
    }

    /// Build a grid from raw values where 0 means empty
    ///
    /// ```
    /// use tui_2048_core::Grid;
    ///
    /// let grid = Grid::from_values([[0, 2, 0, 0], [0; 4], [0; 4], [0, 0, 0, 4]]).unwrap();
    /// assert_eq!(grid.get(0, 1), Some(Some(2)));
    /// assert_eq!(grid.tile_count(), 2);
    /// assert!(Grid::from_values([[3, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_err());
    /// ```
    pub fn from_values(values: [[u32; GRID_SIZE]; GRID_SIZE]) -> Result<Self, GridError> {
        let mut rows = [[None; GRID_SIZE]; GRID_SIZE];
        for (r, row) in values.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                rows[r][c] = if value == 0 { None } else { Some(value) };
            }
        }
        Self::from_rows(rows)
    }

    /// Internal constructor for rows produced by the engine itself
    pub(crate) fn from_rows_unchecked(rows: [Row; GRID_SIZE]) -> Self {
        Self { rows }
    }

    /// Borrow the rows
    pub fn rows(&self) -> &[Row; GRID_SIZE] {
        &self.rows
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Return a copy of this grid with (row, col) set to `value`
    ///
    /// ```
    /// use tui_2048_core::{Grid, GridError};
    ///
    /// let grid = Grid::new().with_tile(3, 0, 8).unwrap();
    /// assert_eq!(grid.get(3, 0), Some(Some(8)));
    /// assert_eq!(grid.with_tile(4, 0, 8), Err(GridError::OutOfBounds { row: 4, col: 0 }));
    /// ```
    pub fn with_tile(&self, row: usize, col: usize, value: u32) -> Result<Self, GridError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(GridError::OutOfBounds { row, col });
        }
        if !is_valid_tile(value) {
            return Err(GridError::InvalidTile { row, col, value });
        }
        let mut next = *self;
        next.set(row, col, Some(value));
        Ok(next)
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < GRID_SIZE && col < GRID_SIZE {
            self.rows[row][col] = cell;
        }
    }

    /// All empty cells in row-major scan order
    pub fn empty_positions(&self) -> EmptyPositions {
        let mut out = EmptyPositions::new();
        for (row, cells) in self.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_none() {
                    out.push((row, col));
                }
            }
        }
        out
    }

    pub fn is_full(&self) -> bool {
        self.rows.iter().flatten().all(|cell| cell.is_some())
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.rows.iter().flatten().flatten().map(|&v| v as u64).sum()
    }

    /// Largest tile on the grid (0 when empty)
    pub fn max_tile(&self) -> u32 {
        self.rows.iter().flatten().flatten().copied().max().unwrap_or(0)
    }

    /// Raw values with 0 for empty cells
    pub fn to_values(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        let mut out = [[0u32; GRID_SIZE]; GRID_SIZE];
        for (r, row) in self.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                out[r][c] = cell.unwrap_or(0);
            }
        }
        out
    }

    /// Rotate the grid 90° clockwise `quarter_turns` times (taken mod 4)
    ///
    /// One turn maps `(r, c)` to `(c, N - 1 - r)`, so the left column becomes the top row.
    pub fn rotate(&self, quarter_turns: u8) -> Self {
        let mut grid = *self;
        for _ in 0..(quarter_turns % 4) {
            grid = grid.rotate_cw();
        }
        grid
    }

    fn rotate_cw(&self) -> Self {
        let mut rows = [[None; GRID_SIZE]; GRID_SIZE];
        for (r, row) in self.rows.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                rows[c][GRID_SIZE - 1 - r] = cell;
            }
        }
        Self { rows }
    }

    /// Mirror across the vertical axis (column `c` swaps with `N - 1 - c`)
    pub fn mirror_horizontal(&self) -> Self {
        let mut rows = self.rows;
        for row in rows.iter_mut() {
            row.reverse();
        }
        Self { rows }
    }

    /// True if any cell holds the winning tile
    pub fn has_winning_tile(&self) -> bool {
        self.rows
            .iter()
            .flatten()
            .any(|&cell| cell == Some(WIN_TILE))
    }

    /// True if the grid has an empty cell or two adjacent equal tiles below `MAX_TILE`
    ///
    /// This is the game-over test on the current grid, not a legality check for
    /// one particular direction (see [`Grid::can_move`] for that).
    pub fn has_any_valid_move(&self) -> bool {
        if !self.is_full() {
            return true;
        }
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                let current = self.rows[r][c];
                if current == Some(MAX_TILE) {
                    continue;
                }
                if c + 1 < GRID_SIZE && current == self.rows[r][c + 1] {
                    return true;
                }
                if r + 1 < GRID_SIZE && current == self.rows[r + 1][c] {
                    return true;
                }
            }
        }
        false
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        if rows.len() != GRID_SIZE {
            return Err(GridError::RowCount {
                expected: GRID_SIZE,
                got: rows.len(),
            });
        }
        let mut out = [[None; GRID_SIZE]; GRID_SIZE];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != GRID_SIZE {
                return Err(GridError::RowLength {
                    row: r,
                    expected: GRID_SIZE,
                    got: row.len(),
                });
            }
            out[r].copy_from_slice(row);
        }
        Self::from_rows(out)
    }
}

/// Space-separated rows, `0` for empty, one row per line
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.unwrap_or(0))?;
            }
        }
        Ok(())
    }
}
