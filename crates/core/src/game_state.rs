//! Game state module - turn sequencing on top of the pure board engine
//!
//! The engine never owns game state. This controller holds the current grid,
//! score, terminal flags and a one-level undo snapshot, and rebuilds them from
//! engine outputs after every accepted move.

use log::{debug, info};

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::spawn::{initial_grid, spawn_random_tile_at, SpawnedTile};
use crate::types::{Direction, GameAction};

/// What happened on the last accepted move (consumed by observers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvent {
    pub direction: Direction,
    pub score_delta: u32,
    pub merges: u32,
    pub spawned: Option<SpawnedTile>,
}

/// State restored by `undo`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct UndoSnapshot {
    grid: Grid,
    score: u32,
    moves: u32,
    won: bool,
    keep_playing: bool,
    game_over: bool,
    last_event: Option<MoveEvent>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    rng: SimpleRng,
    seed: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    score: u32,
    /// Best score seen in this process; survives restart and undo.
    best_score: u32,
    moves: u32,
    won: bool,
    /// Set by `continue_after_win`; the win flag is not raised again.
    keep_playing: bool,
    game_over: bool,
    previous: Option<UndoSnapshot>,
    last_event: Option<MoveEvent>,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let grid = initial_grid(&mut rng);
        Self::from_parts(grid, rng, seed)
    }

    /// Start from a given grid; later spawns draw from `seed`
    pub fn with_grid(grid: Grid, seed: u32) -> Self {
        Self::from_parts(grid, SimpleRng::new(seed), seed)
    }

    fn from_parts(grid: Grid, rng: SimpleRng, seed: u32) -> Self {
        let mut state = Self {
            grid,
            rng,
            seed,
            episode_id: 0,
            score: 0,
            best_score: 0,
            moves: 0,
            won: false,
            keep_playing: false,
            game_over: false,
            previous: None,
            last_event: None,
        };
        state.refresh_flags();
        state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn keep_playing(&self) -> bool {
        self.keep_playing
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn can_undo(&self) -> bool {
        self.previous.is_some()
    }

    pub fn last_event(&self) -> Option<MoveEvent> {
        self.last_event
    }

    /// Apply a game action. Returns true if the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction),
            GameAction::Undo => self.undo(),
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::ContinueAfterWin => self.continue_after_win(),
        }
    }

    /// Slide in `direction`; on an effective move, spawn a tile and update score and flags.
    ///
    /// A direction that changes nothing neither spawns nor replaces the undo snapshot.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        if self.game_over {
            return false;
        }

        let outcome = self.grid.apply_move(direction);
        if !outcome.changed {
            debug!("move {} had no effect", direction.as_str());
            return false;
        }

        self.previous = Some(self.undo_snapshot());

        let (grid, spawned) = spawn_random_tile_at(&outcome.grid, &mut self.rng);
        self.grid = grid;
        self.score = self.score.saturating_add(outcome.score_delta);
        self.best_score = self.best_score.max(self.score);
        self.moves += 1;
        self.last_event = Some(MoveEvent {
            direction,
            score_delta: outcome.score_delta,
            merges: outcome.merges,
            spawned,
        });
        debug!(
            "move {} +{} (score {}, {} merges)",
            direction.as_str(),
            outcome.score_delta,
            self.score,
            outcome.merges
        );

        let was_won = self.won;
        self.refresh_flags();
        if self.won && !was_won {
            info!("reached {} after {} moves", self.grid.max_tile(), self.moves);
        }
        if self.game_over {
            info!("game over: score {}, max tile {}", self.score, self.grid.max_tile());
        }
        true
    }

    /// Restore the state before the last accepted move (one level only)
    pub fn undo(&mut self) -> bool {
        let Some(prev) = self.previous.take() else {
            return false;
        };
        self.grid = prev.grid;
        self.score = prev.score;
        self.moves = prev.moves;
        self.won = prev.won;
        self.keep_playing = prev.keep_playing;
        self.game_over = prev.game_over;
        self.last_event = prev.last_event;
        info!("undo to move {}", self.moves);
        true
    }

    /// Start a new game; the RNG stream continues and the best score is kept
    pub fn restart(&mut self) {
        self.grid = initial_grid(&mut self.rng);
        self.episode_id = self.episode_id.wrapping_add(1);
        self.score = 0;
        self.moves = 0;
        self.won = false;
        self.keep_playing = false;
        self.game_over = false;
        self.previous = None;
        self.last_event = None;
        self.refresh_flags();
        info!("restart (episode {})", self.episode_id);
    }

    /// Dismiss the win state and keep playing
    pub fn continue_after_win(&mut self) -> bool {
        if !self.won {
            return false;
        }
        self.won = false;
        self.keep_playing = true;
        true
    }

    /// Plain-data view for renderers and advisors
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot (no allocation)
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.grid.to_values();
        out.score = self.score;
        out.best_score = self.best_score;
        out.moves = self.moves;
        out.episode_id = self.episode_id;
        out.seed = self.seed;
        out.max_tile = self.grid.max_tile();
        out.won = self.won;
        out.game_over = self.game_over;
        out.can_undo = self.can_undo();
        out.last_score_delta = self.last_event.map_or(0, |e| e.score_delta);
    }

    fn undo_snapshot(&self) -> UndoSnapshot {
        UndoSnapshot {
            grid: self.grid,
            score: self.score,
            moves: self.moves,
            won: self.won,
            keep_playing: self.keep_playing,
            game_over: self.game_over,
            last_event: self.last_event,
        }
    }

    fn refresh_flags(&mut self) {
        if !self.keep_playing {
            self.won = self.grid.has_winning_tile();
        }
        self.game_over = !self.grid.has_any_valid_move();
    }

    #[cfg(test)]
    pub(crate) fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
        self.refresh_flags();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
