use crate::grid::{Grid, GridError};
use crate::types::GRID_SIZE;

/// Plain-data copy of the game state for renderers and advisors.
///
/// `board` uses 0 for empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub board: [[u32; GRID_SIZE]; GRID_SIZE],
    pub score: u32,
    pub best_score: u32,
    pub moves: u32,
    pub episode_id: u32,
    pub seed: u32,
    pub max_tile: u32,
    pub last_score_delta: u32,
    pub won: bool,
    pub game_over: bool,
    pub can_undo: bool,
}

impl GameSnapshot {
    pub fn to_grid(&self) -> Result<Grid, GridError> {
        Grid::from_values(self.board)
    }
}
