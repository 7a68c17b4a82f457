//! Headless self-play with the heuristic advisor.
//!
//! Plays `--games` games from consecutive seeds and prints one line per game
//! plus a summary. Useful for checking engine throughput and advisor strength
//! without a terminal.

use std::time::Instant;

use anyhow::{bail, Result};
use clap::Parser;
use log::{debug, info};

use tui_2048::advice::{AdviceError, HeuristicAdvisor};
use tui_2048::core::GameState;
use tui_2048::types::{GameAction, WIN_TILE};

#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Play 2048 games headlessly with the heuristic advisor")]
struct Args {
    #[arg(long, default_value_t = 10)]
    games: u32,
    /// Seed of the first game; game `i` uses `seed + i`.
    #[arg(long, default_value_t = 1)]
    seed: u32,
    /// Stop a game after this many accepted moves.
    #[arg(long, default_value_t = 100_000)]
    max_moves: u32,
    /// End each game as soon as it reaches 2048.
    #[arg(long)]
    stop_at_win: bool,
}

#[derive(Debug, Clone, Copy)]
struct GameResult {
    seed: u32,
    score: u32,
    moves: u32,
    max_tile: u32,
}

fn play(seed: u32, max_moves: u32, stop_at_win: bool) -> Result<GameResult> {
    let advisor = HeuristicAdvisor::new();
    let mut game = GameState::new(seed);

    while game.moves() < max_moves {
        if game.won() {
            if stop_at_win {
                break;
            }
            game.apply_action(GameAction::ContinueAfterWin);
        }
        let advice = match advisor.evaluate(game.grid()) {
            Ok(advice) => advice,
            Err(AdviceError::NoMoves) => break,
            Err(e) => return Err(e.into()),
        };
        if !game.apply_move(advice.suggested_move) {
            bail!(
                "seed {seed}: advisor suggested {} which does not move",
                advice.suggested_move.as_str()
            );
        }
        debug!("seed {seed} move {}: {}", game.moves(), advice.suggested_move.as_str());
    }

    Ok(GameResult {
        seed,
        score: game.score(),
        moves: game.moves(),
        max_tile: game.grid().max_tile(),
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    info!("simulate: {args:?}");

    let started = Instant::now();
    let mut results = Vec::with_capacity(args.games as usize);
    for i in 0..args.games {
        let res = play(args.seed.wrapping_add(i), args.max_moves, args.stop_at_win)?;
        println!(
            "seed={} score={} moves={} max_tile={}",
            res.seed, res.score, res.moves, res.max_tile
        );
        results.push(res);
    }

    if results.is_empty() {
        return Ok(());
    }
    let n = results.len() as f64;
    let total_moves: u64 = results.iter().map(|r| r.moves as u64).sum();
    let mean_score = results.iter().map(|r| r.score as f64).sum::<f64>() / n;
    let best = results.iter().map(|r| r.score).max().unwrap_or(0);
    let wins = results.iter().filter(|r| r.max_tile >= WIN_TILE).count();
    let secs = started.elapsed().as_secs_f64();

    println!(
        "games={} mean_score={:.1} best_score={} reached_{}={} moves/s={:.0}",
        results.len(),
        mean_score,
        best,
        WIN_TILE,
        wins,
        total_moves as f64 / secs.max(1e-9)
    );
    Ok(())
}
