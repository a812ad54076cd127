//! Observation helpers for the admission controller

use super::limiter::AdmissionController;
use crate::config::RateLimitStrategy;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tokio::time::Instant;

impl AdmissionController {
    /// Configured permit count
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Permits not currently held
    pub fn available_permits(&self) -> usize {
        self.permits.available_permits()
    }

    /// Calls currently holding a permit
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Spacing window, `None` when spacing is disabled
    pub async fn window(&self) -> Option<Duration> {
        self.window.lock().await.window
    }

    pub async fn strategy(&self) -> RateLimitStrategy {
        self.window.lock().await.strategy
    }

    /// Instant of the most recent recorded dispatch
    pub async fn last_dispatch(&self) -> Option<Instant> {
        self.window.lock().await.last_dispatch
    }

    /// Recorded dispatch instants still relevant to the sliding window
    pub async fn recent_dispatches(&self) -> Vec<Instant> {
        self.window.lock().await.history.iter().copied().collect()
    }
}
