//! Core admission controller

use super::types::{Admission, DispatchWindow, WindowSlot};
use crate::config::{RateLimitConfig, RateLimitStrategy, Validate};
use crate::utils::error::{GatewayError, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::{Mutex, Semaphore};
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info};

/// Permit pool plus dispatch window, created once per gateway
#[derive(Debug)]
pub struct AdmissionController {
    pub(super) capacity: usize,
    pub(super) permits: Semaphore,
    pub(super) in_flight: AtomicUsize,
    pub(super) window: Mutex<DispatchWindow>,
}

impl AdmissionController {
    /// Create a controller from configuration
    ///
    /// Zero capacity, or a zero window while spacing is enabled, is rejected.
    pub fn new(config: &RateLimitConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| GatewayError::Config(format!("Rate limit config error: {}", e)))?;

        let window = config.enabled.then(|| config.window());
        info!(
            capacity = config.capacity,
            window_ms = config.window_ms,
            spacing = config.enabled,
            strategy = ?config.strategy,
            "Admission controller created"
        );

        Ok(Self {
            capacity: config.capacity,
            permits: Semaphore::new(config.capacity),
            in_flight: AtomicUsize::new(0),
            window: Mutex::new(DispatchWindow::new(
                config.capacity,
                window,
                config.strategy,
            )),
        })
    }

    /// `capacity` dispatches per sliding `window`
    pub fn with_window(capacity: usize, window: Duration) -> Result<Self> {
        Self::new(&RateLimitConfig {
            enabled: true,
            capacity,
            window_ms: window_millis(window)?,
            strategy: RateLimitStrategy::SlidingWindow,
        })
    }

    /// Permit bound only, dispatches are never spaced
    pub fn unthrottled(capacity: usize) -> Result<Self> {
        Self::new(&RateLimitConfig::unthrottled(capacity))
    }

    /// Wait for a permit
    pub async fn acquire(&self) -> Result<Admission<'_>> {
        let permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| GatewayError::internal("Permit pool closed"))?;
        self.in_flight.fetch_add(1, Ordering::SeqCst);

        Ok(Admission {
            _permit: permit,
            in_flight: &self.in_flight,
            admitted_at: Instant::now(),
        })
    }

    /// Wait until the window allows one more dispatch and hold it
    ///
    /// The window stays locked for as long as the returned slot lives, so
    /// other callers queue behind it instead of racing for the same slot.
    pub async fn reserve(&self) -> WindowSlot<'_> {
        let window = self.window.lock().await;
        let now = Instant::now();
        let ready_at = window.ready_at(now);

        if ready_at > now {
            debug!(
                wait_ms = (ready_at - now).as_millis() as u64,
                "Dispatch window full, waiting"
            );
            sleep_until(ready_at).await;
        }

        WindowSlot {
            window,
            waited: ready_at - now,
        }
    }
}

fn window_millis(window: Duration) -> Result<u64> {
    u64::try_from(window.as_millis())
        .map_err(|_| GatewayError::config("Rate limit window is too large"))
}
