//! # Authentication Circuit Breaker
//!
//! Ante stage that sends each transaction through exactly one of two
//! authentication stages:
//!
//! ```text
//!                        ┌── params.is_smart_account_active(ctx) == false ──→ classic_flow
//! [CircuitBreaker] ──────┤
//!                        └── true ──→ selected_authenticators(tx)
//!                                        ├── empty / absent / malformed ──→ classic_flow
//!                                        └── non-empty ───────────────────→ authenticator_flow
//! ```
//!
//! The chosen stage receives the untouched transaction and the caller's
//! continuation, and its result is returned as-is. A transaction that selects
//! authenticators while the breaker is open is not rejected here; the classic
//! stage judges it on signatures alone.

use crate::domain::entities::AnteContext;
use crate::domain::errors::AnteError;
use crate::domain::extension::{lookup_selection, SelectionLookup};
use crate::domain::routing::RoutingDecision;
use crate::metrics::RoutingMetrics;
use crate::ports::inbound::{AnteDecorator, Next};
use crate::ports::outbound::ParamsReader;
use shared_types::Transaction;
use std::sync::Arc;
use tracing::{debug, warn};

/// Routes between the smart authenticator stage and the classic signature stage.
pub struct CircuitBreakerDecorator<P: ParamsReader> {
    params: Arc<P>,
    authenticator_flow: Arc<dyn AnteDecorator>,
    classic_flow: Arc<dyn AnteDecorator>,
    metrics: Arc<RoutingMetrics>,
}

impl<P: ParamsReader> CircuitBreakerDecorator<P> {
    /// Create a circuit breaker.
    ///
    /// # Arguments
    /// * `params` - Source of the activation flag
    /// * `authenticator_flow` - Stage run for opted-in transactions while active
    /// * `classic_flow` - Stage run for everything else
    pub fn new(
        params: Arc<P>,
        authenticator_flow: Arc<dyn AnteDecorator>,
        classic_flow: Arc<dyn AnteDecorator>,
    ) -> Self {
        Self {
            params,
            authenticator_flow,
            classic_flow,
            metrics: Arc::new(RoutingMetrics::new()),
        }
    }

    /// Share an existing metrics collector.
    pub fn with_metrics(mut self, metrics: Arc<RoutingMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &RoutingMetrics {
        &self.metrics
    }

    /// Decide which stage handles `tx` at `ctx`'s height.
    pub fn route(&self, ctx: &AnteContext, tx: &Transaction) -> RoutingDecision {
        let active = self.params.is_smart_account_active(ctx);

        RoutingDecision::decide(active, || {
            let lookup = lookup_selection(tx);
            if let SelectionLookup::Malformed(e) = &lookup {
                warn!(
                    height = ctx.block_height(),
                    error = %e,
                    "Malformed tx extension, treating selection as absent"
                );
                self.metrics.record_malformed_extension();
            }
            lookup.into_selection()
        })
    }
}

impl<P: ParamsReader> AnteDecorator for CircuitBreakerDecorator<P> {
    fn ante_handle(
        &self,
        ctx: AnteContext,
        tx: &Transaction,
        simulate: bool,
        next: Next<'_>,
    ) -> Result<AnteContext, AnteError> {
        let decision = self.route(&ctx, tx);
        self.metrics.record_route(decision);

        debug!(
            route = %decision,
            height = ctx.block_height(),
            messages = tx.messages().len(),
            simulate,
            "Routing transaction authentication"
        );

        let flow = match decision {
            RoutingDecision::Classic => &self.classic_flow,
            RoutingDecision::Smart => &self.authenticator_flow,
        };
        flow.ante_handle(ctx, tx, simulate, next)
    }
}
