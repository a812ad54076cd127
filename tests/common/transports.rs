//! Stub transports
//!
//! Real `Transport` implementations that never touch the network. Each one
//! records when every dispatch started and ended, and how many dispatches
//! were ever in progress at the same time.

use async_trait::async_trait;
use bytes::Bytes;
use regdoc_gateway::{Signature, Transport, TransportError};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::Instant;

/// One observed dispatch
#[derive(Debug, Clone, Copy)]
pub struct DispatchRecord {
    pub started: Instant,
    pub ended: Instant,
}

/// Records every dispatch and answers after an optional delay
#[derive(Debug, Default)]
pub struct RecordingTransport {
    latency: Duration,
    fail_with: Option<TransportError>,
    records: Mutex<Vec<DispatchRecord>>,
    active: AtomicUsize,
    max_active: AtomicUsize,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Each dispatch takes `latency` before answering
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Every dispatch fails with `error`
    pub fn failing(mut self, error: TransportError) -> Self {
        self.fail_with = Some(error);
        self
    }

    /// Recorded dispatches ordered by start
    pub fn records(&self) -> Vec<DispatchRecord> {
        let mut records = self.records.lock().unwrap().clone();
        records.sort_by_key(|r| r.started);
        records
    }

    pub fn starts(&self) -> Vec<Instant> {
        self.records().iter().map(|r| r.started).collect()
    }

    /// Highest number of overlapping dispatches seen
    pub fn max_active(&self) -> usize {
        self.max_active.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, body: Bytes, _signature: &Signature) -> Result<Bytes, TransportError> {
        let started = Instant::now();
        let active = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active.fetch_max(active, Ordering::SeqCst);

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        self.active.fetch_sub(1, Ordering::SeqCst);
        self.records.lock().unwrap().push(DispatchRecord {
            started,
            ended: Instant::now(),
        });

        match &self.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(body),
        }
    }

    fn name(&self) -> &str {
        "recording"
    }
}
