//! Chat-completion advisor: prompt template, wire types and reply parsing.

use std::future::Future;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::advice::{Advice, AdviceError, Advisor};
use crate::core::Grid;
use crate::types::Direction;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const MAX_TOKENS: u32 = 150;
pub const TEMPERATURE: f32 = 0.1;

/// Rows of space-separated values, `0` for empty cells.
pub fn format_board(grid: &Grid) -> String {
    grid.to_values()
        .iter()
        .map(|row| row.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_prompt(grid: &Grid) -> String {
    format!(
        "You are an expert 2048 game AI. Analyze this board state and suggest the best move.

Board (0 = empty):
{}

Rules:
- Tiles slide and merge when moved
- Goal is to create 2048 tile and maximize score
- Avoid filling the board completely

Respond with JSON only:
{{
  \"suggestedMove\": \"up|down|left|right\",
  \"reasoning\": \"Brief explanation (max 50 words)\",
  \"confidence\": a number between 0 and 1 base on the confidence of the move
}}",
        format_board(grid)
    )
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ChatRequest {
    pub fn for_grid(model: &str, grid: &Grid) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage::user(build_prompt(grid))],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

/// Provider reply; only `choices[].message` is read, other fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

impl ChatResponse {
    /// Content of the first choice, if non-blank.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|c| c.message.content.as_str())
            .filter(|s| !s.trim().is_empty())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAdvice {
    suggested_move: String,
    #[serde(default)]
    reasoning: String,
    confidence: f64,
}

/// Parse a model reply into [`Advice`].
///
/// Accepts a bare JSON object or one wrapped in a fenced code block.
pub fn parse_advice_reply(content: &str) -> Result<Advice, AdviceError> {
    let body = strip_code_fence(content);
    if body.is_empty() {
        return Err(AdviceError::EmptyReply);
    }

    let raw: RawAdvice = serde_json::from_str(body)?;
    let suggested_move =
        Direction::from_str(&raw.suggested_move).ok_or(AdviceError::InvalidDirection(raw.suggested_move))?;
    if !raw.confidence.is_finite() || !(0.0..=1.0).contains(&raw.confidence) {
        return Err(AdviceError::InvalidConfidence(raw.confidence));
    }

    Ok(Advice {
        suggested_move,
        reasoning: raw.reasoning.trim().to_string(),
        confidence: raw.confidence as f32,
    })
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop an optional language tag on the opening fence line.
    let rest = match rest.find('\n') {
        Some(i) => &rest[i + 1..],
        None => rest,
    };
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

/// Delivers one chat request to a provider and returns its reply.
pub trait ChatTransport: Send + Sync {
    fn complete(&self, request: &ChatRequest)
        -> impl Future<Output = Result<ChatResponse, AdviceError>> + Send;
}

/// Advisor backed by a chat-completion provider.
#[derive(Debug, Clone)]
pub struct ChatAdvisor<T> {
    transport: T,
    model: String,
}

impl<T: ChatTransport> ChatAdvisor<T> {
    pub fn new(transport: T, model: impl Into<String>) -> Self {
        Self {
            transport,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: ChatTransport> Advisor for ChatAdvisor<T> {
    fn advise(&self, grid: Grid) -> impl Future<Output = Result<Advice, AdviceError>> + Send {
        async move {
            if !grid.has_any_valid_move() {
                return Err(AdviceError::NoMoves);
            }
            let request = ChatRequest::for_grid(&self.model, &grid);
            debug!("chat: requesting advice from {}", self.model);
            let response = self.transport.complete(&request).await?;
            let content = response.first_content().ok_or(AdviceError::EmptyReply)?;
            let advice = parse_advice_reply(content)?;
            if !grid.can_move(advice.suggested_move) {
                warn!(
                    "chat: suggested {} does not change the grid",
                    advice.suggested_move.as_str()
                );
            }
            Ok(advice)
        }
    }

    fn name(&self) -> &'static str {
        "chat"
    }
}
