//! Error types for the gateway

use crate::core::dispatch::TransportError;
use crate::core::gateway::CallState;
use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors, rejected at construction time
    #[error("Configuration error: {0}")]
    Config(String),

    /// The remote call failed; never retried by the gateway
    #[error("Transport failure: {0}")]
    TransportFailure(#[from] TransportError),

    /// A suspended caller was cancelled before it could dispatch
    #[error("Wait interrupted while {stage}")]
    InterruptedWait {
        /// Suspension point the caller was parked at
        stage: CallState,
    },

    /// The document could not be converted to its wire form
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Invalid request errors
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client construction errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
