//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the 2048 board engine and the turn controller built on it.
//! It has **no dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Randomness is injected through [`TileRng`]
//! - **Portable**: Can run in any environment (terminal, headless simulation, advisors)
//! - **Value-based**: [`Grid`] is `Copy`; every operation returns a new grid
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 grid value, rotation, mirroring and terminal-state checks
//! - [`line`]: the single slide-and-merge primitive
//! - [`moves`]: the four directions, each a rotation around the left move
//! - [`rng`]: injectable randomness ([`SimpleRng`] LCG, [`ScriptedRng`] for tests)
//! - [`spawn`]: random tile placement and the opening grid
//! - [`game_state`]: score, best score, win/game-over flags and one-level undo
//! - [`snapshot`]: plain-data view for renderers and advisors
//!
//! # Game Rules
//!
//! - Tiles slide as far as possible in the chosen direction
//! - Two equal tiles that meet merge into one tile of double value, once per move
//! - The score grows by the value of every merged tile
//! - After a move that changed the grid, a 2 (90%) or 4 (10%) appears on an empty cell
//! - Reaching a 2048 tile wins; a full grid with no equal neighbours ends the game
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, GameAction};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.grid().tile_count(), 2);
//!
//! // Apply game actions; a blocked direction is a no-op.
//! for dir in Direction::ALL {
//!     game.apply_action(GameAction::Move(dir));
//! }
//!
//! assert!(game.moves() > 0);
//! assert!(game.can_undo());
//! ```

pub mod game_state;
pub mod grid;
pub mod line;
pub mod moves;
pub mod rng;
pub mod snapshot;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, MoveEvent};
pub use grid::{is_valid_tile, EmptyPositions, Grid, GridError, Row};
pub use line::{compact_and_merge_line, LineOutcome};
pub use moves::MoveOutcome;
pub use rng::{ScriptedRng, SimpleRng, TileRng};
pub use snapshot::GameSnapshot;
pub use spawn::{initial_grid, spawn_random_tile, spawn_random_tile_at, spawn_value, SpawnedTile};
