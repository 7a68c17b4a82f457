//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board engine, terminal rendering, move advice).
//!
//! # Board Dimensions
//!
//! The classic 2048 board is a 4x4 grid:
//!
//! - **Rows**: indexed 0-3, top to bottom
//! - **Columns**: indexed 0-3, left to right
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_SIZE` | 4 | Side length of the square grid |
//! | `WIN_TILE` | 2048 | Tile value that wins the game |
//! | `INITIAL_TILES` | 2 | Tiles spawned on a fresh board |
//! | `FOUR_TILE_PERCENT` | 10 | Chance (in percent) that a spawn is a 4 |
//! | `MAX_TILE` | 131072 | Largest tile a 4x4 board can hold |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GRID_SIZE, WIN_TILE};
//!
//! // Parse from string (case-insensitive)
//! let dir = Direction::from_str("Left").unwrap();
//! assert_eq!(dir, Direction::Left);
//!
//! // Every direction reduces to "move left" after some clockwise turns
//! assert_eq!(Direction::Down.quarter_turns(), 1);
//!
//! // Parse game action
//! let action = GameAction::from_str("up").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! assert_eq!(GRID_SIZE, 4);
//! assert_eq!(WIN_TILE, 2048);
//! ```

/// Side length of the square grid (4 rows x 4 columns)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Tile value that wins the game
pub const WIN_TILE: u32 = 2048;

/// Number of tiles placed on a fresh board
pub const INITIAL_TILES: usize = 2;

/// Probability (percent) that a spawned tile is a 4 instead of a 2
pub const FOUR_TILE_PERCENT: u32 = 10;

/// Largest tile value a grid accepts (2^17, the highest tile reachable on 4x4)
///
/// Two tiles of this value do not merge, so doubling never leaves the range.
pub const MAX_TILE: u32 = 1 << 17;

/// A cell on the game grid
///
/// - `None`: Empty cell
/// - `Some(value)`: Tile with a power-of-two value in `2..=MAX_TILE`
pub type Cell = Option<u32>;

/// The four slide directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in a fixed order (used by advisors and move enumeration)
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("RIGHT"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Number of clockwise quarter turns that make this direction "move left".
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::Left.quarter_turns(), 0);
    /// assert_eq!(Direction::Down.quarter_turns(), 1);
    /// assert_eq!(Direction::Right.quarter_turns(), 2);
    /// assert_eq!(Direction::Up.quarter_turns(), 3);
    /// ```
    pub fn quarter_turns(&self) -> u8 {
        match self {
            Direction::Left => 0,
            Direction::Down => 1,
            Direction::Right => 2,
            Direction::Up => 3,
        }
    }

    /// Single-glyph arrow for display
    pub fn arrow(&self) -> char {
        match self {
            Direction::Left => '←',
            Direction::Right => '→',
            Direction::Up => '↑',
            Direction::Down => '↓',
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// These actions are used by both human input and advisors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles in a direction
    Move(Direction),
    /// Revert the last accepted move (one level)
    Undo,
    /// Start a new game
    Restart,
    /// Dismiss the win state and keep playing
    ContinueAfterWin,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("left"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("undo"), Some(GameAction::Undo));
    /// assert_eq!(GameAction::from_str("continue"), Some(GameAction::ContinueAfterWin));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if let Some(direction) = Direction::from_str(s) {
            return Some(GameAction::Move(direction));
        }
        match s.trim().to_lowercase().as_str() {
            "undo" => Some(GameAction::Undo),
            "restart" => Some(GameAction::Restart),
            "continue" => Some(GameAction::ContinueAfterWin),
            _ => None,
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(direction) => direction.as_str(),
            GameAction::Undo => "undo",
            GameAction::Restart => "restart",
            GameAction::ContinueAfterWin => "continue",
        }
    }
}
