//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout frameworks and instead renders into a simple
//! framebuffer that is flushed to the terminal through crossterm.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: pure mapping from a `GameSnapshot` to a framebuffer
//! - [`renderer`]: raw-mode terminal session with full/diff redraws

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AdviceView, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
