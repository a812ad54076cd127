//! Rate limiting configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Rate limiting configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateLimitConfig {
    /// Enforce window spacing; permits are always enforced
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Maximum in-flight calls and maximum dispatches per window
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Window length in milliseconds
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,
    /// How dispatches are spread over the window
    #[serde(default)]
    pub strategy: RateLimitStrategy,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: default_capacity(),
            window_ms: default_window_ms(),
            strategy: RateLimitStrategy::default(),
        }
    }
}

impl RateLimitConfig {
    /// `capacity` dispatches per one `unit`
    pub fn per(unit: WindowUnit, capacity: usize) -> Self {
        Self {
            capacity,
            window_ms: unit.as_duration().as_millis() as u64,
            ..Self::default()
        }
    }

    /// Permit bound only, no window spacing
    pub fn unthrottled(capacity: usize) -> Self {
        Self {
            enabled: false,
            capacity,
            ..Self::default()
        }
    }

    pub fn with_strategy(mut self, strategy: RateLimitStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }
}

/// Rate limiting strategy
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RateLimitStrategy {
    /// At most `capacity` dispatches inside any window-long interval
    #[default]
    SlidingWindow,
    /// Consecutive dispatches at least `window / capacity` apart
    FixedInterval,
}

impl std::str::FromStr for RateLimitStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sliding_window" | "sliding-window" => Ok(Self::SlidingWindow),
            "fixed_interval" | "fixed-interval" => Ok(Self::FixedInterval),
            other => Err(format!("Unknown rate limit strategy: {}", other)),
        }
    }
}

/// Calendar unit a window can be expressed in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WindowUnit {
    Second,
    Minute,
    Hour,
    Day,
}

impl WindowUnit {
    pub fn as_duration(self) -> Duration {
        match self {
            Self::Second => Duration::from_secs(1),
            Self::Minute => Duration::from_secs(60),
            Self::Hour => Duration::from_secs(3600),
            Self::Day => Duration::from_secs(86_400),
        }
    }
}
