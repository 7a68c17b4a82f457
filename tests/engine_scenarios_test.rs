//! Board engine scenarios through the facade crate.

use tui_2048::core::{
    compact_and_merge_line, initial_grid, spawn_random_tile, Grid, GridError, ScriptedRng, SimpleRng,
};
use tui_2048::types::{Direction, WIN_TILE};

fn grid(values: [[u32; 4]; 4]) -> Grid {
    Grid::from_values(values).unwrap()
}

#[test]
fn left_move_scenario() {
    let g = grid([[0, 8, 2, 2], [4, 2, 0, 2], [0, 0, 0, 0], [0, 0, 0, 2]]);
    let out = g.apply_move(Direction::Left);

    assert!(out.changed);
    assert_eq!(out.score_delta, 8);
    assert_eq!(
        out.grid.to_values(),
        [[8, 4, 0, 0], [4, 4, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0]]
    );
    assert_eq!(out.grid.tile_sum(), g.tile_sum());
}

#[test]
fn every_direction_on_one_grid() {
    let g = grid([[2, 0, 2, 4], [0, 0, 0, 4], [0, 0, 0, 0], [2, 0, 0, 0]]);

    assert_eq!(
        g.apply_move(Direction::Right).grid.to_values(),
        [[0, 0, 4, 4], [0, 0, 0, 4], [0, 0, 0, 0], [0, 0, 0, 2]]
    );
    assert_eq!(
        g.apply_move(Direction::Up).grid.to_values(),
        [[4, 0, 2, 8], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]
    );
    assert_eq!(
        g.apply_move(Direction::Down).grid.to_values(),
        [[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [4, 0, 2, 8]]
    );
    assert_eq!(g.apply_move(Direction::Up).score_delta, 12);
}

#[test]
fn no_chain_merge_in_one_move() {
    let out = compact_and_merge_line([Some(2), Some(2), Some(2), None]);
    assert_eq!(out.line, [Some(4), Some(2), None, None]);
    assert_eq!(out.score_delta, 4);

    let out = compact_and_merge_line([Some(4), Some(4), Some(8), None]);
    assert_eq!(out.line, [Some(8), Some(8), None, None]);
    assert_eq!(out.score_delta, 8);

    let out = compact_and_merge_line([Some(2), Some(2), Some(2), Some(2)]);
    assert_eq!(out.line, [Some(4), Some(4), None, None]);
    assert_eq!(out.merges, 2);
}

#[test]
fn blocked_direction_is_unchanged() {
    let g = grid([[2, 4, 0, 0], [8, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    let out = g.apply_move(Direction::Left);
    assert!(!out.changed);
    assert_eq!(out.grid, g);
    assert_eq!(out.score_delta, 0);
}

#[test]
fn win_and_terminal_detection() {
    let mut values = [[0u32; 4]; 4];
    values[2][1] = WIN_TILE;
    assert!(grid(values).has_winning_tile());
    assert!(!grid([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]).has_winning_tile());

    let stuck = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert!(!stuck.has_any_valid_move());
    assert!(stuck.available_moves().is_empty());

    let full_with_pair = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 4]]);
    assert!(full_with_pair.has_any_valid_move());
}

#[test]
fn initial_grid_has_two_small_tiles() {
    for seed in 0..64 {
        let g = initial_grid(&mut SimpleRng::new(seed));
        assert_eq!(g.tile_count(), 2);
        for &v in g.rows().iter().flatten().flatten() {
            assert!(v == 2 || v == 4);
        }
    }
}

#[test]
fn scripted_spawn_places_exact_tile() {
    let g = grid([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    // Third empty cell in row-major order is (0, 3); roll 5 < 10 gives a 4.
    let mut rng = ScriptedRng::new(&[2], &[5]);
    let next = spawn_random_tile(&g, &mut rng);
    assert_eq!(next.get(0, 3), Some(Some(4)));
    assert_eq!(next.tile_count(), 2);
}

#[test]
fn spawn_on_full_grid_is_identity() {
    let full = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert_eq!(spawn_random_tile(&full, &mut SimpleRng::new(9)), full);
}

#[test]
fn rotation_round_trip() {
    let g = grid([[2, 4, 8, 16], [32, 0, 0, 0], [0, 0, 64, 0], [0, 0, 0, 128]]);
    assert_eq!(g.rotate(4), g);
    assert_eq!(g.rotate(1).rotate(3), g);
    assert_eq!(g.rotate(2).rotate(2), g);
    // Clockwise: the top-left corner ends up top-right.
    assert_eq!(g.rotate(1).get(0, 3), Some(Some(2)));
}

#[test]
fn invalid_grids_are_rejected() {
    let mut values = [[0u32; 4]; 4];
    values[1][2] = 3;
    assert!(matches!(
        Grid::from_values(values),
        Err(GridError::InvalidTile { row: 1, col: 2, value: 3 })
    ));

    let short: Vec<Vec<Option<u32>>> = vec![vec![None; 4]; 3];
    assert!(Grid::try_from(short).is_err());
}
