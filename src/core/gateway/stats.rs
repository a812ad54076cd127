//! Gateway counters

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Outcome counters, updated once per `submit` call
#[derive(Debug, Default)]
pub struct GatewayStats {
    submitted: AtomicU64,
    completed: AtomicU64,
    transport_failures: AtomicU64,
    interrupted: AtomicU64,
    rejected: AtomicU64,
}

/// Point-in-time copy of [`GatewayStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GatewayStatsSnapshot {
    pub submitted: u64,
    pub completed: u64,
    pub transport_failures: u64,
    pub interrupted: u64,
    /// Calls refused before dispatch, such as encoding failures
    pub rejected: u64,
}

impl GatewayStats {
    /// Count a new call; the returned guard settles it exactly once
    pub(crate) fn begin(&self) -> CallOutcome<'_> {
        self.submitted.fetch_add(1, Ordering::Relaxed);
        CallOutcome {
            stats: self,
            settled: false,
        }
    }

    pub fn snapshot(&self) -> GatewayStatsSnapshot {
        GatewayStatsSnapshot {
            submitted: self.submitted.load(Ordering::Relaxed),
            completed: self.completed.load(Ordering::Relaxed),
            transport_failures: self.transport_failures.load(Ordering::Relaxed),
            interrupted: self.interrupted.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
        }
    }
}

impl GatewayStatsSnapshot {
    /// Calls that have returned, whatever the outcome
    pub fn finished(&self) -> u64 {
        self.completed + self.transport_failures + self.interrupted + self.rejected
    }
}

/// Pending outcome of one call. A call dropped before it settles, such as an
/// aborted task, counts as interrupted.
#[must_use]
pub(crate) struct CallOutcome<'a> {
    stats: &'a GatewayStats,
    settled: bool,
}

impl CallOutcome<'_> {
    pub(crate) fn completed(self) {
        let stats = self.stats;
        self.settle(&stats.completed);
    }

    pub(crate) fn transport_failure(self) {
        let stats = self.stats;
        self.settle(&stats.transport_failures);
    }

    pub(crate) fn interrupted(self) {
        let stats = self.stats;
        self.settle(&stats.interrupted);
    }

    pub(crate) fn rejected(self) {
        let stats = self.stats;
        self.settle(&stats.rejected);
    }

    fn settle(mut self, counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
        self.settled = true;
    }
}

impl Drop for CallOutcome<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.stats.interrupted.fetch_add(1, Ordering::Relaxed);
        }
    }
}
