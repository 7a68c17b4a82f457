//! Advisor configuration from environment variables.

use std::future::Future;
use std::time::Duration;

use crate::advice::{Advice, AdviceError, Advisor};
use crate::chat::{ChatAdvisor, DEFAULT_MODEL};
use crate::core::Grid;
use crate::heuristic::HeuristicAdvisor;
use crate::transport::{LineTransport, DEFAULT_BRIDGE_ADDR};

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisorKind {
    Heuristic,
    Chat,
    Off,
}

impl AdvisorKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "heuristic" | "local" => Some(Self::Heuristic),
            "chat" | "llm" => Some(Self::Chat),
            "off" | "none" | "0" | "false" => Some(Self::Off),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceConfig {
    pub kind: AdvisorKind,
    pub timeout_ms: u64,
    pub bridge_addr: String,
    pub model: String,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            kind: AdvisorKind::Heuristic,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            bridge_addr: DEFAULT_BRIDGE_ADDR.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl AdviceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset, blank or unparsable values fall back
    /// to defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            get(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let defaults = Self::default();
        let kind = non_empty("TUI_2048_ADVISOR")
            .and_then(|s| AdvisorKind::from_str(&s))
            .unwrap_or(defaults.kind);
        let timeout_ms = non_empty("TUI_2048_ADVICE_TIMEOUT_MS")
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(defaults.timeout_ms);
        let bridge_addr = non_empty("TUI_2048_CHAT_BRIDGE").unwrap_or(defaults.bridge_addr);
        let model = non_empty("TUI_2048_CHAT_MODEL").unwrap_or(defaults.model);

        Self {
            kind,
            timeout_ms,
            bridge_addr,
            model,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn build(&self) -> ConfiguredAdvisor {
        match self.kind {
            AdvisorKind::Heuristic => ConfiguredAdvisor::Heuristic(HeuristicAdvisor::new()),
            AdvisorKind::Chat => ConfiguredAdvisor::Chat(ChatAdvisor::new(
                LineTransport::new(self.bridge_addr.clone()),
                self.model.clone(),
            )),
            AdvisorKind::Off => ConfiguredAdvisor::Off,
        }
    }
}

/// The advisor selected at startup.
#[derive(Debug, Clone)]
pub enum ConfiguredAdvisor {
    Heuristic(HeuristicAdvisor),
    Chat(ChatAdvisor<LineTransport>),
    Off,
}

impl ConfiguredAdvisor {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Off)
    }
}

impl Advisor for ConfiguredAdvisor {
    fn advise(&self, grid: Grid) -> impl Future<Output = Result<Advice, AdviceError>> + Send {
        async move {
            match self {
                Self::Heuristic(a) => a.advise(grid).await,
                Self::Chat(a) => a.advise(grid).await,
                Self::Off => Err(AdviceError::Disabled),
            }
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Heuristic(a) => a.name(),
            Self::Chat(a) => a.name(),
            Self::Off => "off",
        }
    }
}
