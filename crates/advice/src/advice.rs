//! Advice payload, errors and the advisor trait.

use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Grid;
use crate::types::Direction;

/// A suggested move with a short rationale.
///
/// Serialized with the keys chat providers are asked to answer with:
/// `suggestedMove`, `reasoning`, `confidence`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advice {
    #[serde(with = "direction_name")]
    pub suggested_move: Direction,
    pub reasoning: String,
    /// In `[0, 1]`.
    pub confidence: f32,
}

#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("no move changes the grid")]
    NoMoves,
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),
    #[error("advisor timed out after {0} ms")]
    Timeout(u64),
    #[error("advisor returned an empty reply")]
    EmptyReply,
    #[error("reply exceeds {0} bytes without a line break")]
    ReplyTooLong(usize),
    #[error("malformed reply: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid direction {0:?}")]
    InvalidDirection(String),
    #[error("confidence {0} is outside [0, 1]")]
    InvalidConfidence(f64),
    #[error("advisor is disabled")]
    Disabled,
}

/// A strategy that suggests a direction for a grid.
pub trait Advisor: Send + Sync {
    fn advise(&self, grid: Grid) -> impl Future<Output = Result<Advice, AdviceError>> + Send;

    /// Short label for logs and the side panel.
    fn name(&self) -> &'static str;
}

/// Directions travel as lowercase names (`"left"`, `"up"`, ...).
pub(crate) mod direction_name {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::types::Direction;

    pub fn serialize<S: Serializer>(dir: &Direction, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(dir.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Direction, D::Error> {
        let raw = String::deserialize(d)?;
        Direction::from_str(raw.trim()).ok_or_else(|| de::Error::custom(format!("unknown direction {raw:?}")))
    }
}
