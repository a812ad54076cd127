//! Admission control types and guards

use crate::config::RateLimitStrategy;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::{MutexGuard, SemaphorePermit};
use tokio::time::Instant;

/// Dispatch history shared by all callers
#[derive(Debug)]
pub(super) struct DispatchWindow {
    /// Maximum dispatches per window
    pub(super) capacity: usize,
    /// `None` disables spacing entirely
    pub(super) window: Option<Duration>,
    pub(super) strategy: RateLimitStrategy,
    /// Most recent dispatch instants, oldest first, at most `capacity` long
    pub(super) history: VecDeque<Instant>,
    /// Never moves backwards
    pub(super) last_dispatch: Option<Instant>,
}

/// One held permit
///
/// Dropping it returns the permit to the pool, on every exit path.
#[derive(Debug)]
pub struct Admission<'a> {
    pub(super) _permit: SemaphorePermit<'a>,
    pub(super) in_flight: &'a AtomicUsize,
    pub(super) admitted_at: Instant,
}

impl Admission<'_> {
    pub fn admitted_at(&self) -> Instant {
        self.admitted_at
    }
}

impl Drop for Admission<'_> {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Exclusive hold on the dispatch window, obtained once dispatching is allowed
///
/// The caller either commits its dispatch instant or drops the slot, in which
/// case the history is left untouched.
#[derive(Debug)]
pub struct WindowSlot<'a> {
    pub(super) window: MutexGuard<'a, DispatchWindow>,
    pub(super) waited: Duration,
}

impl WindowSlot<'_> {
    /// Record a dispatch happening now and release the window
    pub fn commit(mut self) -> Instant {
        self.window.record(Instant::now())
    }

    /// Time spent suspended for spacing
    pub fn waited(&self) -> Duration {
        self.waited
    }
}
