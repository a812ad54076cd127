//! Main gateway configuration

use super::*;
use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "REGDOC_";

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GatewayConfig {
    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    /// Outbound transport configuration
    #[serde(default)]
    pub transport: TransportConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GatewayConfig {
    /// Build from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));
        let mut config = Self::default();

        if let Some(value) = get("RATE_LIMIT_ENABLED") {
            config.rate_limit.enabled = parse_var("RATE_LIMIT_ENABLED", &value)?;
        }
        if let Some(value) = get("RATE_LIMIT_CAPACITY") {
            config.rate_limit.capacity = parse_var("RATE_LIMIT_CAPACITY", &value)?;
        }
        if let Some(value) = get("RATE_LIMIT_WINDOW_MS") {
            config.rate_limit.window_ms = parse_var("RATE_LIMIT_WINDOW_MS", &value)?;
        }
        if let Some(value) = get("RATE_LIMIT_STRATEGY") {
            config.rate_limit.strategy = value.parse().map_err(GatewayError::Config)?;
        }
        if let Some(value) = get("ENDPOINT") {
            config.transport.endpoint = value;
        }
        if let Some(value) = get("TIMEOUT_SECS") {
            config.transport.timeout_secs = parse_var("TIMEOUT_SECS", &value)?;
        }
        if let Some(value) = get("AUTH_HEADER") {
            config.transport.auth_header = value;
        }
        if let Some(value) = get("AUTH_SCHEME") {
            config.transport.auth_scheme = if value.is_empty() { None } else { Some(value) };
        }
        if let Some(value) = get("LOG_LEVEL") {
            config.logging.level = value;
        }
        if let Some(value) = get("LOG_JSON") {
            config.logging.json = parse_var("LOG_JSON", &value)?;
        }

        Ok(config)
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e| {
        GatewayError::Config(format!(
            "Invalid value for {}{}: {} ({})",
            ENV_PREFIX, name, value, e
        ))
    })
}
