//! Spacing strategy implementations

use super::types::DispatchWindow;
use crate::config::RateLimitStrategy;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::Instant;

impl DispatchWindow {
    pub(super) fn new(
        capacity: usize,
        window: Option<Duration>,
        strategy: RateLimitStrategy,
    ) -> Self {
        Self {
            capacity,
            window,
            strategy,
            history: VecDeque::new(),
            last_dispatch: None,
        }
    }

    /// Earliest instant at or after `now` when one more dispatch keeps the policy
    pub(super) fn ready_at(&self, now: Instant) -> Instant {
        let Some(window) = self.window else {
            return now;
        };

        let earliest = match self.strategy {
            RateLimitStrategy::SlidingWindow => self.sliding_window_ready_at(window),
            RateLimitStrategy::FixedInterval => self
                .last_dispatch
                .map(|last| last + self.min_interval(window)),
        };

        earliest.map_or(now, |at| at.max(now))
    }

    /// The oldest of the last `capacity` dispatches must have left the window
    fn sliding_window_ready_at(&self, window: Duration) -> Option<Instant> {
        if self.history.len() < self.capacity {
            return None;
        }
        self.history.front().map(|&oldest| oldest + window)
    }

    /// Gap between consecutive dispatches under the fixed-interval strategy
    pub(super) fn min_interval(&self, window: Duration) -> Duration {
        let nanos = window.as_nanos() / self.capacity.max(1) as u128;
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    /// Record a dispatch; returns the instant actually stored
    pub(super) fn record(&mut self, at: Instant) -> Instant {
        let at = self.last_dispatch.map_or(at, |last| at.max(last));
        self.last_dispatch = Some(at);

        if self.window.is_some() && self.strategy == RateLimitStrategy::SlidingWindow {
            self.history.push_back(at);
            while self.history.len() > self.capacity {
                self.history.pop_front();
            }
        }

        at
    }
}
