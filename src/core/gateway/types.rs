//! Call lifecycle and response types

use crate::utils::error::Result;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::fmt;
use std::time::Duration;
use tokio::time::Instant;

/// Lifecycle of a single `submit` call
///
/// `Idle -> AwaitingPermit -> AwaitingWindow -> Dispatching -> Completed | Failed`.
/// There is no transition back from `Failed`; the gateway never retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallState {
    Idle,
    /// Suspended until a permit is free
    AwaitingPermit,
    /// Suspended until the dispatch window allows one more dispatch
    AwaitingWindow,
    Dispatching,
    Completed,
    Failed,
}

impl fmt::Display for CallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::AwaitingPermit => "awaiting permit",
            Self::AwaitingWindow => "awaiting window",
            Self::Dispatching => "dispatching",
            Self::Completed => "completed",
            Self::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Raw answer of the remote service for one dispatched document
#[derive(Debug, Clone)]
pub struct DispatchResponse {
    pub(super) body: Bytes,
    pub(super) dispatched_at: Instant,
    pub(super) queued_for: Duration,
}

impl DispatchResponse {
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Body as text, with invalid UTF-8 replaced
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Instant recorded in the dispatch window for this call
    pub fn dispatched_at(&self) -> Instant {
        self.dispatched_at
    }

    /// Time between entering `submit` and reaching the transport
    pub fn queued_for(&self) -> Duration {
        self.queued_for
    }
}
