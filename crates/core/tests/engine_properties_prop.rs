#![forbid(unsafe_code)]

/**
 * Property tests for the board engine.
 *
 * Invariants covered:
 * - A move that reports no change is a fixed point.
 * - Tile count drops by exactly the number of merges.
 * - Total tile value is conserved; the score delta is the sum of merged tiles.
 * - Four single clockwise turns return the original grid.
 * - Right on a mirrored grid mirrors left on the original.
 * - Every direction matches its rotation of the left move.
 * - A move never produces an invalid tile, including next to MAX_TILE.
 */
use proptest::prelude::*;
use tui_2048_core::{compact_and_merge_line, is_valid_tile, spawn_random_tile, Grid, SimpleRng};
use tui_2048_types::{Direction, MAX_TILE};

const MAX_EXP: u32 = MAX_TILE.trailing_zeros();

fn grid_from_exponents(exps: [u32; 16]) -> Grid {
    let mut values = [[0u32; 4]; 4];
    for (i, e) in exps.iter().enumerate() {
        values[i / 4][i % 4] = if *e == 0 { 0 } else { 1 << e };
    }
    Grid::from_values(values).expect("generated tiles are in range")
}

/// Mostly everyday boards, plus crowded boards at the top of the tile range
fn grid_strategy() -> impl Strategy<Value = Grid> {
    let everyday = proptest::array::uniform16(0u32..=11);
    let near_cap = proptest::array::uniform16(prop_oneof![
        Just(0u32),
        Just(MAX_EXP - 1),
        Just(MAX_EXP),
    ]);
    prop_oneof![3 => everyday, 1 => near_cap].prop_map(grid_from_exponents)
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

proptest! {
    #[test]
    fn unchanged_move_is_a_fixed_point(grid in grid_strategy(), dir in direction_strategy()) {
        let out = grid.apply_move(dir);
        if !out.changed {
            prop_assert_eq!(out.grid, grid);
            prop_assert_eq!(out.score_delta, 0);
        }
        let again = out.grid.apply_move(dir);
        if !out.changed {
            prop_assert!(!again.changed);
        }
    }

    #[test]
    fn tile_count_drops_by_merges(grid in grid_strategy(), dir in direction_strategy()) {
        let out = grid.apply_move(dir);
        prop_assert!(out.grid.tile_count() <= grid.tile_count());
        prop_assert_eq!(
            grid.tile_count() - out.grid.tile_count(),
            out.merges as usize
        );
    }

    #[test]
    fn total_value_is_conserved(grid in grid_strategy(), dir in direction_strategy()) {
        let out = grid.apply_move(dir);
        prop_assert_eq!(out.grid.tile_sum(), grid.tile_sum());
        // Each merge creates a tile of at least 4.
        prop_assert!(out.score_delta as u64 >= 4 * out.merges as u64);
    }

    #[test]
    fn four_turns_round_trip(grid in grid_strategy()) {
        let turned = grid.rotate(1).rotate(1).rotate(1).rotate(1);
        prop_assert_eq!(turned, grid);
    }

    #[test]
    fn left_and_right_are_mirror_images(grid in grid_strategy()) {
        let left = grid.apply_move(Direction::Left);
        let right = grid.mirror_horizontal().apply_move(Direction::Right);
        prop_assert_eq!(left.grid.mirror_horizontal(), right.grid);
        prop_assert_eq!(left.score_delta, right.score_delta);
        prop_assert_eq!(left.changed, right.changed);
    }

    #[test]
    fn directions_agree_with_rotated_left(grid in grid_strategy(), dir in direction_strategy()) {
        let turns = dir.quarter_turns();
        let via_left = grid.rotate(turns).apply_move(Direction::Left);
        let direct = grid.apply_move(dir);
        prop_assert_eq!(via_left.grid.rotate((4 - turns) % 4), direct.grid);
        prop_assert_eq!(via_left.score_delta, direct.score_delta);
    }

    #[test]
    fn moves_keep_tiles_valid(grid in grid_strategy(), dir in direction_strategy()) {
        let out = grid.apply_move(dir);
        for &value in out.grid.rows().iter().flatten().flatten() {
            prop_assert!(is_valid_tile(value));
        }
    }

    #[test]
    fn no_valid_move_means_every_direction_is_blocked(grid in grid_strategy()) {
        if !grid.has_any_valid_move() {
            for dir in Direction::ALL {
                prop_assert!(!grid.apply_move(dir).changed);
            }
        }
    }

    #[test]
    fn spawn_adds_one_tile_unless_full(grid in grid_strategy(), seed in any::<u32>()) {
        let mut rng = SimpleRng::new(seed);
        let next = spawn_random_tile(&grid, &mut rng);
        if grid.is_full() {
            prop_assert_eq!(next, grid);
        } else {
            prop_assert_eq!(next.tile_count(), grid.tile_count() + 1);
            let added = next.tile_sum() - grid.tile_sum();
            prop_assert!(added == 2 || added == 4);
        }
    }
}

#[test]
fn largest_tiles_move_without_overflow() {
    let half = MAX_TILE / 2;
    let line = [Some(MAX_TILE), Some(MAX_TILE), Some(half), Some(half)];
    let out = compact_and_merge_line(line);
    assert_eq!(out.line, [Some(MAX_TILE), Some(MAX_TILE), Some(MAX_TILE), None]);
    assert_eq!(out.score_delta, MAX_TILE);

    let m = MAX_TILE;
    let grid = Grid::from_values([[m, m, m, m], [m, m, m, m], [half; 4], [half; 4]]).unwrap();
    for dir in Direction::ALL {
        let out = grid.apply_move(dir);
        assert!(out.grid.max_tile() <= MAX_TILE);
        for &value in out.grid.rows().iter().flatten().flatten() {
            assert!(is_valid_tile(value), "{value} after {dir:?}");
        }
    }
    let up = grid.apply_move(Direction::Up);
    assert_eq!(up.merges, 4);
    assert_eq!(up.score_delta, 4 * MAX_TILE);

    let left = grid.apply_move(Direction::Left);
    assert_eq!(left.merges, 4);
    assert_eq!(left.grid.to_values()[0], [m; 4]);
    assert_eq!(left.grid.to_values()[2], [m, m, 0, 0]);
}

#[test]
fn move_then_spawn_rollout_preserves_invariants() {
    let mut rng = SimpleRng::new(20261019);
    let mut grid = tui_2048_core::initial_grid(&mut rng);
    let mut score = 0u64;

    for i in 0..2_000usize {
        if !grid.has_any_valid_move() {
            break;
        }
        let moves = grid.available_moves();
        assert!(!moves.is_empty(), "valid-move check disagrees with directions");
        let out = grid.apply_move(moves[i % moves.len()]);
        assert!(out.changed);
        score += out.score_delta as u64;
        grid = spawn_random_tile(&out.grid, &mut rng);
    }

    assert!(score > 0);
    for &value in grid.rows().iter().flatten().flatten() {
        assert!(is_valid_tile(value));
    }
}
