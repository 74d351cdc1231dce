//! Routing counters for the circuit breaker.
//!
//! Counters are observational only; nothing reads them back into a decision.

use crate::domain::routing::RoutingDecision;
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe routing counters.
#[derive(Debug, Default)]
pub struct RoutingMetrics {
    /// Transactions sent down the classic signature path
    pub classic_routed: AtomicU64,
    /// Transactions sent down the smart authenticator path
    pub smart_routed: AtomicU64,
    /// Extensions that failed to decode and were treated as absent
    pub malformed_extensions: AtomicU64,
}

/// Point-in-time copy of `RoutingMetrics`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoutingMetricsSnapshot {
    pub classic_routed: u64,
    pub smart_routed: u64,
    pub malformed_extensions: u64,
}

impl RoutingMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_route(&self, decision: RoutingDecision) {
        let counter = match decision {
            RoutingDecision::Classic => &self.classic_routed,
            RoutingDecision::Smart => &self.smart_routed,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_malformed_extension(&self) {
        self.malformed_extensions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> RoutingMetricsSnapshot {
        RoutingMetricsSnapshot {
            classic_routed: self.classic_routed.load(Ordering::Relaxed),
            smart_routed: self.smart_routed.load(Ordering::Relaxed),
            malformed_extensions: self.malformed_extensions.load(Ordering::Relaxed),
        }
    }

    /// Total routed transactions.
    pub fn total_routed(&self) -> u64 {
        let snapshot = self.snapshot();
        snapshot.classic_routed + snapshot.smart_routed
    }
}
