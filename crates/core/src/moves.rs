//! Moves module - the four directions built from one left-move primitive
//!
//! A move rotates the grid clockwise until the requested direction points left,
//! slides every row with [`compact_and_merge_line`], then rotates back. There is
//! exactly one merge implementation; the directions differ only in turn count.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::line::compact_and_merge_line;
use crate::types::Direction;

/// Result of applying a direction to a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub direction: Direction,
    pub grid: Grid,
    /// True if any tile moved or merged
    pub changed: bool,
    /// Sum of the tiles created by merges in this move
    pub score_delta: u32,
    pub merges: u32,
}

impl Grid {
    /// Slide and merge all tiles in `direction`. Does not spawn a tile.
    ///
    /// ```
    /// use tui_2048_core::Grid;
    /// use tui_2048_types::Direction;
    ///
    /// let grid = Grid::from_values([[0, 8, 2, 2], [4, 2, 0, 2], [0; 4], [0, 0, 0, 2]]).unwrap();
    /// let out = grid.apply_move(Direction::Left);
    /// assert!(out.changed);
    /// assert_eq!(out.score_delta, 8);
    /// assert_eq!(out.grid.to_values(), [[8, 4, 0, 0], [4, 4, 0, 0], [0; 4], [2, 0, 0, 0]]);
    /// ```
    pub fn apply_move(&self, direction: Direction) -> MoveOutcome {
        let turns = direction.quarter_turns();
        let mut rows = *self.rotate(turns).rows();

        let mut changed = false;
        let mut score_delta = 0u32;
        let mut merges = 0u32;
        for row in rows.iter_mut() {
            let out = compact_and_merge_line(*row);
            *row = out.line;
            changed |= out.changed;
            score_delta += out.score_delta;
            merges += out.merges;
        }

        let grid = Grid::from_rows_unchecked(rows).rotate((4 - turns) % 4);
        MoveOutcome {
            direction,
            grid,
            changed,
            score_delta,
            merges,
        }
    }

    /// True if moving in `direction` would change the grid
    pub fn can_move(&self, direction: Direction) -> bool {
        self.apply_move(direction).changed
    }

    /// Every direction that changes the grid, in [`Direction::ALL`] order
    pub fn available_moves(&self) -> ArrayVec<Direction, 4> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.can_move(d))
            .collect()
    }
}
