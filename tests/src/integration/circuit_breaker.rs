//! # Circuit Breaker Scenarios
//!
//! Drives `CircuitBreakerDecorator` with counting mock stages and the real
//! height-indexed params keeper, across block boundaries.
//!
//! ## Priority Encoding
//!
//! | Stage | Priority bump |
//! |-------|---------------|
//! | classic | +1 |
//! | smart | +2 |
//!
//! Each scenario starts from a fresh context with priority 0, so the resulting
//! priority names the stage that ran.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use qc_18_account_plus::adapters::InMemoryParamsKeeper;
    use qc_18_account_plus::test_utils::{generate_keypair, send_msg, signed_tx, TestKey};
    use qc_18_account_plus::{
        chain_decorators, AccountPlusConfig, AnteContext, AnteDecorator, AnteError, AnteHandler,
        CircuitBreakerDecorator, MsgSetActiveState, Next, Params, ParamsKeeper, ParamsReader,
        RoutingMetrics, TX_EXTENSION_TYPE_URL,
    };
    use shared_types::{Any, Transaction};

    use crate::init_tracing;

    const CHAIN_ID: &str = "quantum-chain-test";

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Bumps priority by `step` and continues down the chain.
    struct CountingStage {
        step: i64,
        calls: AtomicUsize,
    }

    impl CountingStage {
        fn new(step: i64) -> Arc<Self> {
            Arc::new(Self {
                step,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl AnteDecorator for CountingStage {
        fn ante_handle(
            &self,
            ctx: AnteContext,
            tx: &Transaction,
            simulate: bool,
            next: Next<'_>,
        ) -> Result<AnteContext, AnteError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let priority = ctx.priority() + self.step;
            next.run(ctx.with_priority(priority), tx, simulate)
        }
    }

    struct Harness {
        keeper: Arc<InMemoryParamsKeeper>,
        breaker: Arc<CircuitBreakerDecorator<InMemoryParamsKeeper>>,
        classic: Arc<CountingStage>,
        smart: Arc<CountingStage>,
        metrics: Arc<RoutingMetrics>,
        alice: TestKey,
        bob: TestKey,
    }

    impl Harness {
        fn new() -> Self {
            init_tracing();

            let config = AccountPlusConfig::for_testing();
            let keeper = Arc::new(InMemoryParamsKeeper::from_config(&config));
            let classic = CountingStage::new(1);
            let smart = CountingStage::new(2);
            let metrics = Arc::new(RoutingMetrics::new());

            let breaker = Arc::new(
                CircuitBreakerDecorator::new(keeper.clone(), smart.clone(), classic.clone())
                    .with_metrics(metrics.clone()),
            );

            Self {
                keeper,
                breaker,
                classic,
                smart,
                metrics,
                alice: generate_keypair(),
                bob: generate_keypair(),
            }
        }

        /// Two messages, one per signer, signed by both.
        fn two_signer_tx(&self, selected: Vec<u64>) -> Transaction {
            signed_tx(
                CHAIN_ID,
                vec![
                    send_msg(self.alice.address, self.bob.address),
                    send_msg(self.bob.address, self.alice.address),
                ],
                &[&self.alice, &self.bob],
                selected,
            )
        }

        fn run(&self, height: u64, tx: &Transaction) -> Result<AnteContext, AnteError> {
            let stage: Arc<dyn AnteDecorator> = self.breaker.clone();
            chain_decorators(vec![stage]).handle(AnteContext::new(CHAIN_ID, height), tx, false)
        }

        fn set_active(&self, height: u64, active: bool) {
            let msg = MsgSetActiveState {
                authority: self.keeper.authority(),
                active,
            };
            self.keeper
                .set_active_state(&AnteContext::new(CHAIN_ID, height), &msg)
                .expect("authority must be accepted");
        }
    }

    // =============================================================================
    // GOVERNANCE TOGGLE ACROSS BLOCKS
    // =============================================================================

    /// Deactivate, run; reactivate, run without and then with a selection.
    #[test]
    fn test_flag_toggle_routes_classic_then_smart() {
        let h = Harness::new();

        // Block 1: governance opens the breaker.
        h.set_active(1, false);

        // Block 2: flag is off, selection is ignored.
        let selecting = h.two_signer_tx(vec![0, 1]);
        let ctx = h.run(2, &selecting).unwrap();
        assert_eq!(ctx.priority(), 1);

        // Block 2: governance closes the breaker again.
        h.set_active(2, true);

        // Block 3: active, but nothing selected.
        let plain = h.two_signer_tx(vec![]);
        let ctx = h.run(3, &plain).unwrap();
        assert_eq!(ctx.priority(), 1);
        assert_eq!(h.classic.calls(), 2);

        // Block 3: active and selecting.
        let ctx = h.run(3, &h.two_signer_tx(vec![1])).unwrap();
        assert_eq!(ctx.priority(), 2);
        assert_eq!(h.smart.calls(), 1);

        let snapshot = h.metrics.snapshot();
        assert_eq!(snapshot.classic_routed, 2);
        assert_eq!(snapshot.smart_routed, 1);
    }

    /// Priorities accumulate 1, 2, 4 when one context flows through all three
    /// phases.
    #[test]
    fn test_accumulated_priority_across_phases() {
        let h = Harness::new();
        let chain = chain_decorators(vec![h.breaker.clone() as Arc<dyn AnteDecorator>]);

        h.set_active(1, false);
        let ctx = AnteContext::new(CHAIN_ID, 2);
        let ctx = chain.handle(ctx, &h.two_signer_tx(vec![0]), false).unwrap();
        assert_eq!(ctx.priority(), 1);

        h.set_active(2, true);
        let ctx = ctx.with_block_height(3);
        let ctx = chain.handle(ctx, &h.two_signer_tx(vec![]), false).unwrap();
        assert_eq!(ctx.priority(), 2);

        let ctx = chain.handle(ctx, &h.two_signer_tx(vec![1]), false).unwrap();
        assert_eq!(ctx.priority(), 4);
    }

    /// A toggle issued mid-block does not reach the rest of that block.
    #[test]
    fn test_toggle_is_invisible_until_next_block() {
        let h = Harness::new();
        let tx = h.two_signer_tx(vec![0, 1]);

        assert_eq!(h.run(5, &tx).unwrap().priority(), 2);

        h.set_active(5, false);
        assert!(h.keeper.is_smart_account_active(&AnteContext::new(CHAIN_ID, 5)));
        assert_eq!(h.run(5, &tx).unwrap().priority(), 2);

        assert_eq!(h.run(6, &tx).unwrap().priority(), 1);
        assert_eq!(h.smart.calls(), 2);
        assert_eq!(h.classic.calls(), 1);
    }

    #[test]
    fn test_set_params_direct_write_lands_next_block() {
        let h = Harness::new();
        let ctx = AnteContext::new(CHAIN_ID, 9);
        h.keeper.set_params(
            &ctx,
            Params {
                is_smart_account_active: false,
            },
        );

        let tx = h.two_signer_tx(vec![3]);
        assert_eq!(h.run(9, &tx).unwrap().priority(), 2);
        assert_eq!(h.run(10, &tx).unwrap().priority(), 1);
    }

    // =============================================================================
    // EXTENSION EDGE CASES
    // =============================================================================

    /// Flag off with a valid selection: classic runs, smart never does.
    #[test]
    fn test_breaker_open_ignores_selection() {
        let h = Harness::new();
        h.set_active(0, false);

        let ctx = h.run(1, &h.two_signer_tx(vec![0, 1])).unwrap();

        assert_eq!(ctx.priority(), 1);
        assert_eq!(h.smart.calls(), 0);
    }

    #[test]
    fn test_malformed_extension_falls_back_to_classic() {
        let h = Harness::new();
        let mut tx = h.two_signer_tx(vec![]);
        tx.body
            .non_critical_extension_options
            .push(Any::new(TX_EXTENSION_TYPE_URL, vec![0xFF]));

        let ctx = h.run(1, &tx).unwrap();

        assert_eq!(ctx.priority(), 1);
        assert_eq!(h.smart.calls(), 0);
        assert_eq!(h.metrics.snapshot().malformed_extensions, 1);
    }

    #[test]
    fn test_unrelated_extension_option_is_ignored() {
        let h = Harness::new();
        let mut tx = h.two_signer_tx(vec![]);
        tx.body
            .non_critical_extension_options
            .push(Any::new("/qc.other.Extension", vec![1, 2, 3]));

        assert_eq!(h.run(1, &tx).unwrap().priority(), 1);
        assert_eq!(h.metrics.snapshot().malformed_extensions, 0);
    }

    #[test]
    fn test_stage_error_is_returned_unchanged() {
        struct Rejecting;

        impl AnteDecorator for Rejecting {
            fn ante_handle(
                &self,
                _ctx: AnteContext,
                _tx: &Transaction,
                _simulate: bool,
                _next: Next<'_>,
            ) -> Result<AnteContext, AnteError> {
                Err(AnteError::SignatureCountMismatch {
                    expected: 1,
                    actual: 0,
                })
            }
        }

        let config = AccountPlusConfig::for_testing();
        let keeper = Arc::new(InMemoryParamsKeeper::from_config(&config));
        let smart = CountingStage::new(2);
        let breaker = CircuitBreakerDecorator::new(keeper, smart.clone(), Arc::new(Rejecting));

        let alice = generate_keypair();
        let tx = signed_tx(
            CHAIN_ID,
            vec![send_msg(alice.address, alice.address)],
            &[&alice],
            vec![],
        );

        let result =
            breaker.ante_handle(AnteContext::new(CHAIN_ID, 1), &tx, false, Next::terminal());

        assert_eq!(
            result,
            Err(AnteError::SignatureCountMismatch {
                expected: 1,
                actual: 0
            })
        );
        assert_eq!(smart.calls(), 0);
    }
}
