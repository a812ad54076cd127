//! Configuration validators
//!
//! Validation implementations for the gateway configuration sections.

use super::trait_def::Validate;
use crate::config::models::*;
use reqwest::header::{HeaderName, HeaderValue};
use tracing::debug;
use url::Url;

/// Largest capacity the permit pool can represent
const MAX_CAPACITY: usize = tokio::sync::Semaphore::MAX_PERMITS;

/// Longest accepted window, one year
const MAX_WINDOW_MS: u64 = 365 * 24 * 60 * 60 * 1000;

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating gateway configuration");

        self.rate_limit.validate()?;
        self.transport.validate()?;
        self.logging.validate()?;

        debug!("Gateway configuration validation completed");
        Ok(())
    }
}

impl Validate for RateLimitConfig {
    fn validate(&self) -> Result<(), String> {
        if self.capacity == 0 {
            return Err("Rate limit capacity must be greater than 0".to_string());
        }

        if self.capacity > MAX_CAPACITY {
            return Err(format!(
                "Rate limit capacity {} exceeds the maximum of {}",
                self.capacity, MAX_CAPACITY
            ));
        }

        if self.enabled && self.window_ms == 0 {
            return Err(
                "Rate limit window must be greater than 0 (set enabled: false to disable spacing)"
                    .to_string(),
            );
        }

        if self.window_ms > MAX_WINDOW_MS {
            return Err(format!(
                "Rate limit window {}ms exceeds the maximum of {}ms",
                self.window_ms, MAX_WINDOW_MS
            ));
        }

        Ok(())
    }
}

impl Validate for TransportConfig {
    fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| format!("Transport endpoint has invalid URL format: {}", e))?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(format!(
                    "Transport endpoint must use http:// or https:// scheme, got: {}",
                    scheme
                ));
            }
        }

        if url.host_str().is_none() {
            return Err("Transport endpoint URL must have a valid host".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("Transport timeout must be greater than 0".to_string());
        }

        if self.connect_timeout_secs == 0 {
            return Err("Transport connect timeout must be greater than 0".to_string());
        }

        HeaderName::from_bytes(self.auth_header.as_bytes())
            .map_err(|e| format!("Invalid auth header name '{}': {}", self.auth_header, e))?;

        HeaderValue::from_str(&self.content_type)
            .map_err(|e| format!("Invalid content type '{}': {}", self.content_type, e))?;

        if let Some(scheme) = &self.auth_scheme {
            if scheme.trim().is_empty() || scheme.contains(char::is_whitespace) {
                return Err(format!("Invalid auth scheme '{}'", scheme));
            }
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        tracing_subscriber::EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| format!("Invalid log level '{}': {}", self.level, e))
    }
}
