//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_2048::{core,input,term,advice,types}`
//! while the implementation lives in dedicated crates under `crates/`.

pub use tui_2048_advice as advice;
pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
