//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

#![allow(missing_docs)]

pub mod gateway;
pub mod logging;
pub mod rate_limit;
pub mod transport;

// Re-export all configuration types
pub use gateway::*;
pub use logging::*;
pub use rate_limit::*;
pub use transport::*;

/// Default permits / dispatches per window
pub fn default_capacity() -> usize {
    1
}

/// Default window length in milliseconds
pub fn default_window_ms() -> u64 {
    1000
}

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

pub fn default_connect_timeout() -> u64 {
    10
}

/// Document creation endpoint of the registration service
pub fn default_endpoint() -> String {
    "https://ismp.crpt.ru/api/v3/lk/documents/create".to_string()
}

pub fn default_user_agent() -> String {
    format!("regdoc-gateway/{}", env!("CARGO_PKG_VERSION"))
}

pub fn default_content_type() -> String {
    "application/json".to_string()
}

pub fn default_auth_header() -> String {
    "Authorization".to_string()
}

pub fn default_auth_scheme() -> Option<String> {
    Some("Bearer".to_string())
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}
