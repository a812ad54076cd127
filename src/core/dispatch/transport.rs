//! Transport port consumed by the gateway

use crate::core::models::Signature;
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;
use thiserror::Error;

/// Failure of a single network exchange
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection or IO failure
    #[error("Network error: {0}")]
    Network(String),

    /// The exchange did not finish within the client timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The service answered with a non-success status
    #[error("Remote service returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The credential can't be carried by this transport
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),
}

impl TransportError {
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network(message.into())
    }

    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout(message.into())
    }

    /// HTTP status, when the service answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// One network exchange with the registration service
///
/// Implementations are called at most once per submission and never retried
/// by the gateway. They only ever see one request at a time.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send an encoded document and return the raw response body
    async fn send(&self, body: Bytes, signature: &Signature) -> Result<Bytes, TransportError>;

    /// Name used in logs
    fn name(&self) -> &str {
        "transport"
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, body: Bytes, signature: &Signature) -> Result<Bytes, TransportError> {
        (**self).send(body, signature).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
