//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`KeyCommand`]s: game actions for the controller
//! plus the advice requests the front end handles itself.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit, KeyCommand};
