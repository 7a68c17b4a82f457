//! Advice module - move suggestions for the current grid
//!
//! Advisors are pluggable strategies behind the [`Advisor`] trait. They take a
//! grid by value and never touch game state; the caller decides whether to
//! play the suggested direction.
//!
//! - [`heuristic`]: local expectation search over spawn outcomes
//! - [`chat`]: chat-completion prompt and reply codec plus [`ChatAdvisor`]
//! - [`transport`]: line-delimited JSON bridge to a chat provider
//! - [`runtime`]: [`AdviceService`], bridging async advisors to the sync game loop
//! - [`config`]: environment configuration
//!
//! # Environment Variables
//!
//! - `TUI_2048_ADVISOR`: `heuristic` (default), `chat` or `off`
//! - `TUI_2048_ADVICE_TIMEOUT_MS`: per-request timeout (default: 10000)
//! - `TUI_2048_CHAT_BRIDGE`: bridge address (default: "127.0.0.1:7788")
//! - `TUI_2048_CHAT_MODEL`: model name sent to the bridge (default: "gpt-3.5-turbo")
//!
//! # Bridge Protocol
//!
//! The chat advisor does not speak HTTP. It writes one chat request per line
//! to a bridge process, which owns provider credentials and answers with one
//! chat response per line:
//!
//! ```text
//! -> {"model":"gpt-3.5-turbo","messages":[{"role":"user","content":"..."}],"max_tokens":150,"temperature":0.1}
//! <- {"choices":[{"message":{"role":"assistant","content":"{\"suggestedMove\":\"left\",...}"}}]}
//! ```

pub mod advice;
pub mod chat;
pub mod config;
pub mod heuristic;
pub mod runtime;
pub mod transport;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use advice::{Advice, AdviceError, Advisor};
pub use chat::{
    build_prompt, format_board, parse_advice_reply, ChatAdvisor, ChatChoice, ChatMessage,
    ChatRequest, ChatResponse, ChatTransport,
};
pub use config::{AdviceConfig, AdvisorKind, ConfiguredAdvisor};
pub use heuristic::HeuristicAdvisor;
pub use runtime::{AdviceResult, AdviceService};
pub use transport::LineTransport;
