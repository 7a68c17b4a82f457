//! Local heuristic advisor.
//!
//! One ply of expectation: every direction that changes the grid is scored by
//! averaging a static evaluation over each possible spawn (a 2 with
//! probability 0.9, a 4 with probability 0.1, uniform over empty cells).
//!
//! The static evaluation scores each row and column on tile ranks (log2):
//! empty cells and adjacent equal pairs are rewarded, non-monotonic runs and
//! raw tile mass are penalised.

use std::future::{ready, Future};

use log::debug;

use crate::advice::{Advice, AdviceError, Advisor};
use crate::core::Grid;
use crate::types::{Direction, FOUR_TILE_PERCENT, GRID_SIZE};

const LOST_PENALTY: f64 = 200_000.0;
const EMPTY_WEIGHT: f64 = 270.0;
const MERGES_WEIGHT: f64 = 700.0;
const MONOTONICITY_POWER: f64 = 4.0;
const MONOTONICITY_WEIGHT: f64 = 47.0;
const SUM_POWER: f64 = 3.5;
const SUM_WEIGHT: f64 = 11.0;
/// Score points are worth this much evaluation.
const SCORE_WEIGHT: f64 = 10.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAdvisor;

/// Evaluation of one candidate direction.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    direction: Direction,
    value: f64,
    score_delta: u32,
    merges: u32,
    empties: usize,
}

impl HeuristicAdvisor {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous evaluation, used directly by headless tools.
    pub fn evaluate(&self, grid: &Grid) -> Result<Advice, AdviceError> {
        let mut candidates = Vec::with_capacity(4);
        for direction in Direction::ALL {
            let out = grid.apply_move(direction);
            if !out.changed {
                continue;
            }
            let value = out.score_delta as f64 * SCORE_WEIGHT + expected_after_spawn(&out.grid);
            candidates.push(Candidate {
                direction,
                value,
                score_delta: out.score_delta,
                merges: out.merges,
                empties: out.grid.empty_positions().len(),
            });
        }

        // Ties keep the first direction in `Direction::ALL` order.
        let best = candidates
            .iter()
            .copied()
            .reduce(|best, c| if c.value > best.value { c } else { best })
            .ok_or(AdviceError::NoMoves)?;

        let confidence = confidence(&candidates, best.value);
        debug!(
            "heuristic: {} value={:.1} confidence={:.2} over {} candidates",
            best.direction.as_str(),
            best.value,
            confidence,
            candidates.len()
        );

        Ok(Advice {
            suggested_move: best.direction,
            reasoning: reasoning(&best),
            confidence,
        })
    }
}

impl Advisor for HeuristicAdvisor {
    fn advise(&self, grid: Grid) -> impl Future<Output = Result<Advice, AdviceError>> + Send {
        ready(self.evaluate(&grid))
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// Best candidate's share of the margins above the worst candidate.
///
/// A single legal move yields 1.0; indistinguishable moves split evenly.
fn confidence(candidates: &[Candidate], best: f64) -> f32 {
    let worst = candidates.iter().map(|c| c.value).fold(f64::INFINITY, f64::min);
    let total: f64 = candidates.iter().map(|c| c.value - worst + 1.0).sum();
    if total <= 0.0 || !total.is_finite() {
        return 0.0;
    }
    (((best - worst + 1.0) / total) as f32).clamp(0.0, 1.0)
}

fn reasoning(best: &Candidate) -> String {
    let dir = best.direction.as_str();
    if best.merges > 0 {
        format!(
            "{dir} merges {} pair(s) for +{} and leaves {} empty cells",
            best.merges, best.score_delta, best.empties
        )
    } else {
        format!("{dir} keeps the board ordered and leaves {} empty cells", best.empties)
    }
}

/// Average evaluation over every spawn the engine could make next.
fn expected_after_spawn(grid: &Grid) -> f64 {
    let empties = grid.empty_positions();
    if empties.is_empty() {
        return evaluate_grid(grid);
    }

    let p4 = FOUR_TILE_PERCENT as f64 / 100.0;
    let p2 = 1.0 - p4;
    let total: f64 = empties
        .iter()
        .map(|&(row, col)| {
            p2 * evaluate_grid(&place(grid, row, col, 2)) + p4 * evaluate_grid(&place(grid, row, col, 4))
        })
        .sum();
    total / empties.len() as f64
}

fn place(grid: &Grid, row: usize, col: usize, value: u32) -> Grid {
    grid.with_tile(row, col, value).unwrap_or(*grid)
}

/// Static evaluation: sum of line scores over all rows and columns.
pub(crate) fn evaluate_grid(grid: &Grid) -> f64 {
    let values = grid.to_values();
    let mut score = 0.0;
    for i in 0..GRID_SIZE {
        let row = values[i].map(rank);
        let col: [u32; GRID_SIZE] = std::array::from_fn(|r| rank(values[r][i]));
        score += line_score(&row) + line_score(&col);
    }
    score
}

fn rank(value: u32) -> u32 {
    if value == 0 {
        0
    } else {
        value.trailing_zeros()
    }
}

fn line_score(line: &[u32; GRID_SIZE]) -> f64 {
    LOST_PENALTY + empty_score(line) + merge_score(line) - monotonicity_penalty(line) - sum_penalty(line)
}

fn empty_score(line: &[u32; GRID_SIZE]) -> f64 {
    line.iter().filter(|&&r| r == 0).count() as f64 * EMPTY_WEIGHT
}

fn merge_score(line: &[u32; GRID_SIZE]) -> f64 {
    let mut prev = 0;
    let mut run = 0.0;
    let mut merges = 0.0;
    for &r in line {
        if r != 0 && r == prev {
            run += 1.0;
        } else if run > 0.0 {
            merges += 1.0 + run;
            run = 0.0;
        }
        prev = r;
    }
    if run > 0.0 {
        merges += 1.0 + run;
    }
    merges * MERGES_WEIGHT
}

fn monotonicity_penalty(line: &[u32; GRID_SIZE]) -> f64 {
    let mut left = 0.0;
    let mut right = 0.0;
    for pair in line.windows(2) {
        let a = (pair[0] as f64).powf(MONOTONICITY_POWER);
        let b = (pair[1] as f64).powf(MONOTONICITY_POWER);
        if a > b {
            left += a - b;
        } else {
            right += b - a;
        }
    }
    f64::min(left, right) * MONOTONICITY_WEIGHT
}

fn sum_penalty(line: &[u32; GRID_SIZE]) -> f64 {
    line.iter().map(|&r| (r as f64).powf(SUM_POWER)).sum::<f64>() * SUM_WEIGHT
}
