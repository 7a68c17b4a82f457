//! Spawn module - random tile placement and the opening grid

use log::trace;

use crate::grid::Grid;
use crate::rng::TileRng;
use crate::types::{FOUR_TILE_PERCENT, INITIAL_TILES};

/// A tile placed by a spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnedTile {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// Draw a spawn value: 4 with `FOUR_TILE_PERCENT` chance, else 2
pub fn spawn_value<R: TileRng + ?Sized>(rng: &mut R) -> u32 {
    if rng.roll_percent() < FOUR_TILE_PERCENT {
        4
    } else {
        2
    }
}

/// Place a 2 or 4 on a uniformly chosen empty cell and report where it went.
///
/// A full grid is returned unchanged with `None`.
pub fn spawn_random_tile_at<R: TileRng + ?Sized>(
    grid: &Grid,
    rng: &mut R,
) -> (Grid, Option<SpawnedTile>) {
    let empty = grid.empty_positions();
    if empty.is_empty() {
        return (*grid, None);
    }

    let (row, col) = empty[rng.pick_index(empty.len())];
    let value = spawn_value(rng);

    let mut next = *grid;
    next.set(row, col, Some(value));
    trace!("spawned {value} at ({row}, {col})");
    (next, Some(SpawnedTile { row, col, value }))
}

/// Place a 2 or 4 on a uniformly chosen empty cell.
///
/// A full grid is returned unchanged.
pub fn spawn_random_tile<R: TileRng + ?Sized>(grid: &Grid, rng: &mut R) -> Grid {
    spawn_random_tile_at(grid, rng).0
}

/// An empty grid with `INITIAL_TILES` tiles spawned one after another
pub fn initial_grid<R: TileRng + ?Sized>(rng: &mut R) -> Grid {
    let mut grid = Grid::new();
    for _ in 0..INITIAL_TILES {
        grid = spawn_random_tile(&grid, rng);
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedRng, SimpleRng};

    #[test]
    fn test_spawn_on_full_grid_is_noop() {
        let full = Grid::from_values([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
            .unwrap();
        let mut rng = SimpleRng::new(3);
        let (next, spawned) = spawn_random_tile_at(&full, &mut rng);
        assert_eq!(next, full);
        assert_eq!(spawned, None);
    }

    #[test]
    fn test_spawn_uses_empty_cells_in_row_major_order() {
        let grid = Grid::from_values([[2, 0, 2, 0], [2; 4], [2; 4], [2, 2, 2, 0]]).unwrap();
        // Empty cells: (0,1), (0,3), (3,3). Pick index 2 -> (3,3).
        let mut rng = ScriptedRng::new(&[2], &[0]);
        let (next, spawned) = spawn_random_tile_at(&grid, &mut rng);
        assert_eq!(
            spawned,
            Some(SpawnedTile {
                row: 3,
                col: 3,
                value: 4
            })
        );
        assert_eq!(next.get(3, 3), Some(Some(4)));
        assert_eq!(next.tile_count(), grid.tile_count() + 1);
    }

    #[test]
    fn test_spawn_value_threshold() {
        assert_eq!(spawn_value(&mut ScriptedRng::new(&[], &[9])), 4);
        assert_eq!(spawn_value(&mut ScriptedRng::new(&[], &[10])), 2);
        assert_eq!(spawn_value(&mut ScriptedRng::new(&[], &[99])), 2);
    }

    #[test]
    fn test_initial_grid_has_two_small_tiles() {
        for seed in 0..200 {
            let grid = initial_grid(&mut SimpleRng::new(seed));
            assert_eq!(grid.tile_count(), 2, "seed {seed}");
            for cell in grid.rows().iter().flatten().flatten() {
                assert!(*cell == 2 || *cell == 4);
            }
        }
    }

    #[test]
    fn test_initial_grid_second_spawn_sees_first() {
        // Both spawns pick index 0; the second must land on the next empty cell.
        let grid = initial_grid(&mut ScriptedRng::new(&[0], &[50]));
        assert_eq!(grid.get(0, 0), Some(Some(2)));
        assert_eq!(grid.get(0, 1), Some(Some(2)));
    }
}
