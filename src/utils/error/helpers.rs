//! Helper functions for creating and classifying errors

use super::types::GatewayError;
use crate::core::gateway::CallState;

impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn interrupted(stage: CallState) -> Self {
        Self::InterruptedWait { stage }
    }

    pub fn encoding<S: Into<String>>(message: S) -> Self {
        Self::Encoding(message.into())
    }

    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        Self::InvalidRequest(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the remote service was reached (or attempted) and failed
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Self::TransportFailure(_))
    }

    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::InterruptedWait { .. })
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Short stable label, used as a structured logging field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::TransportFailure(_) => "transport_failure",
            Self::InterruptedWait { .. } => "interrupted_wait",
            Self::Encoding(_) => "encoding",
            Self::InvalidRequest(_) => "invalid_request",
            Self::Serialization(_) => "serialization",
            Self::Yaml(_) => "yaml",
            Self::Io(_) => "io",
            Self::HttpClient(_) => "http_client",
            Self::Internal(_) => "internal",
        }
    }
}
