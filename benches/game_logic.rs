use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::advice::HeuristicAdvisor;
use tui_2048::core::{compact_and_merge_line, spawn_random_tile, GameState, Grid, SimpleRng};
use tui_2048::types::Direction;

fn mid_game_grid() -> Grid {
    Grid::from_values([[2, 4, 8, 16], [4, 8, 16, 32], [0, 2, 0, 64], [0, 0, 2, 128]])
        .expect("valid tiles")
}

fn bench_merge_line(c: &mut Criterion) {
    c.bench_function("compact_and_merge_line", |b| {
        b.iter(|| compact_and_merge_line(black_box([Some(2), None, Some(2), Some(4)])))
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let grid = mid_game_grid();

    c.bench_function("apply_move_all_directions", |b| {
        b.iter(|| {
            for dir in Direction::ALL {
                black_box(black_box(&grid).apply_move(dir));
            }
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let grid = mid_game_grid();
    let mut rng = SimpleRng::new(12345);

    c.bench_function("spawn_random_tile", |b| {
        b.iter(|| spawn_random_tile(black_box(&grid), &mut rng))
    });
}

fn bench_game_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let mut i = 0usize;

    c.bench_function("game_state_move", |b| {
        b.iter(|| {
            i += 1;
            if !state.apply_move(Direction::ALL[i % 4]) && state.game_over() {
                state.restart();
            }
        })
    });
}

fn bench_heuristic(c: &mut Criterion) {
    let grid = mid_game_grid();
    let advisor = HeuristicAdvisor::new();

    c.bench_function("heuristic_advice", |b| {
        b.iter(|| advisor.evaluate(black_box(&grid)))
    });
}

criterion_group!(
    benches,
    bench_merge_line,
    bench_apply_move,
    bench_spawn,
    bench_game_move,
    bench_heuristic
);
criterion_main!(benches);
