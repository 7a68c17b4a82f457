//! Integration tests for the game-state controller

use tui_2048::core::{GameState, Grid};
use tui_2048::types::{Direction, GameAction, WIN_TILE};

fn grid(values: [[u32; 4]; 4]) -> Grid {
    Grid::from_values(values).unwrap()
}

#[test]
fn test_new_game_lifecycle() {
    let state = GameState::new(12345);
    assert_eq!(state.grid().tile_count(), 2);
    assert_eq!(state.score(), 0);
    assert_eq!(state.moves(), 0);
    assert!(!state.won());
    assert!(!state.game_over());
    assert!(!state.can_undo());
    assert_eq!(state.seed(), 12345);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameState::new(77);
    let mut b = GameState::new(77);
    for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down].repeat(10) {
        assert_eq!(a.apply_move(dir), b.apply_move(dir));
    }
    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.score(), b.score());
}

#[test]
fn test_blocked_move_neither_spawns_nor_stores_undo() {
    let start = grid([[2, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    let mut state = GameState::with_grid(start, 1);

    assert!(!state.apply_move(Direction::Left));
    assert!(!state.apply_move(Direction::Up));
    assert_eq!(*state.grid(), start);
    assert_eq!(state.moves(), 0);
    assert!(!state.can_undo());
    assert!(state.last_event().is_none());
}

#[test]
fn test_accepted_move_spawns_and_scores() {
    let start = grid([[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    let mut state = GameState::with_grid(start, 1);

    assert!(state.apply_move(Direction::Left));
    assert_eq!(state.score(), 4);
    assert_eq!(state.best_score(), 4);
    assert_eq!(state.moves(), 1);
    // Merged 4 plus one spawned tile.
    assert_eq!(state.grid().tile_count(), 2);
    assert_eq!(state.grid().get(0, 0), Some(Some(4)));

    let event = state.last_event().unwrap();
    assert_eq!(event.direction, Direction::Left);
    assert_eq!(event.score_delta, 4);
    assert_eq!(event.merges, 1);
    let spawned = event.spawned.unwrap();
    assert_eq!(state.grid().get(spawned.row, spawned.col), Some(Some(spawned.value)));
}

#[test]
fn test_undo_restores_exact_prior_state() {
    let start = grid([[2, 2, 4, 0], [0, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 8]]);
    let mut state = GameState::with_grid(start, 3);

    assert!(state.apply_move(Direction::Left));
    let best_after_move = state.best_score();
    assert!(state.can_undo());

    assert!(state.apply_action(GameAction::Undo));
    assert_eq!(*state.grid(), start);
    assert_eq!(state.score(), 0);
    assert_eq!(state.moves(), 0);
    assert!(!state.can_undo());
    // Best score is not rolled back.
    assert_eq!(state.best_score(), best_after_move);

    // Only one level of undo.
    assert!(!state.undo());
}

#[test]
fn test_undo_only_remembers_last_accepted_move() {
    let start = grid([[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    let mut state = GameState::with_grid(start, 5);

    assert!(state.apply_move(Direction::Left));
    let after_first = *state.grid();
    let score_after_first = state.score();

    // Find a direction that moves, then one that is blocked.
    let dir = state.grid().available_moves()[0];
    assert!(state.apply_move(dir));
    for blocked in Direction::ALL {
        if !state.grid().can_move(blocked) {
            assert!(!state.apply_move(blocked));
        }
    }

    assert!(state.undo());
    assert_eq!(*state.grid(), after_first);
    assert_eq!(state.score(), score_after_first);
}

#[test]
fn test_win_then_continue_stays_cleared() {
    let start = grid([[1024, 1024, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    let mut state = GameState::with_grid(start, 9);

    assert!(state.apply_move(Direction::Left));
    assert!(state.won());
    assert_eq!(state.grid().max_tile(), WIN_TILE);
    assert!(state.snapshot().won);

    assert!(state.apply_action(GameAction::ContinueAfterWin));
    assert!(!state.won());
    assert!(state.keep_playing());

    // The 2048 tile is still on the board; later moves must not re-raise the flag.
    for _ in 0..20 {
        let Some(&dir) = state.grid().available_moves().first() else {
            break;
        };
        state.apply_move(dir);
        assert!(!state.won());
    }

    // Continue is a no-op when not won.
    assert!(!state.continue_after_win());
}

#[test]
fn test_game_over_blocks_moves() {
    // One move left: sliding right merges nothing but fills the last gap.
    let start = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 8, 0]]);
    let mut state = GameState::with_grid(start, 2);
    assert!(!state.game_over());

    let mut guard = 0;
    while !state.game_over() && guard < 10 {
        let dir = state.grid().available_moves()[0];
        state.apply_move(dir);
        guard += 1;
    }

    if state.game_over() {
        let before = *state.grid();
        for dir in Direction::ALL {
            assert!(!state.apply_move(dir));
        }
        assert_eq!(*state.grid(), before);
        assert!(state.snapshot().game_over);
        // Undo still works from a terminal state.
        assert!(state.undo());
        assert!(!state.game_over());
    }
}

#[test]
fn test_restart_keeps_best_and_bumps_episode() {
    let start = grid([[2, 2, 4, 4], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    let mut state = GameState::with_grid(start, 4);
    assert!(state.apply_move(Direction::Left));
    let best = state.best_score();
    assert_eq!(best, 12);

    let episode = state.episode_id();
    assert!(state.apply_action(GameAction::Restart));
    assert_eq!(state.episode_id(), episode + 1);
    assert_eq!(state.score(), 0);
    assert_eq!(state.moves(), 0);
    assert_eq!(state.best_score(), best);
    assert!(!state.can_undo());
    assert_eq!(state.grid().tile_count(), 2);
}

#[test]
fn test_snapshot_matches_state() {
    let mut state = GameState::new(31);
    for dir in Direction::ALL.repeat(5) {
        state.apply_move(dir);
    }

    let snap = state.snapshot();
    assert_eq!(snap.board, state.grid().to_values());
    assert_eq!(snap.score, state.score());
    assert_eq!(snap.moves, state.moves());
    assert_eq!(snap.max_tile, state.grid().max_tile());
    assert_eq!(snap.can_undo, state.can_undo());
    assert_eq!(snap.to_grid().unwrap(), *state.grid());
}
