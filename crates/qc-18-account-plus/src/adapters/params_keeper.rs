//! # In-Memory Params Keeper
//!
//! Holds the account-plus params as a height-indexed history.
//!
//! ## Block-Boundary Linearization
//!
//! ```text
//! height:   0 (genesis)      H                H+1
//!           │                │ set_params(p)  │
//!           ├── genesis ─────┼────────────────┼── p ──→
//!                            └ still genesis  └ every tx of H+1 sees p
//! ```
//!
//! A write made while processing block `H` is recorded at `H + 1`. Reads
//! resolve the latest entry at or below the context height, so a block never
//! observes a flag change part-way through.

use crate::config::AccountPlusConfig;
use crate::domain::entities::{AnteContext, MsgSetActiveState, Params};
use crate::domain::errors::ParamsError;
use crate::ports::outbound::{ParamsKeeper, ParamsReader};
use parking_lot::RwLock;
use shared_types::Address;
use std::collections::BTreeMap;
use tracing::info;

/// Params store with a single governance authority.
#[derive(Debug)]
pub struct InMemoryParamsKeeper {
    authority: Address,
    history: RwLock<BTreeMap<u64, Params>>,
}

impl InMemoryParamsKeeper {
    /// Keeper with `genesis` params in force from height 0.
    pub fn new(genesis: Params, authority: Address) -> Self {
        let mut history = BTreeMap::new();
        history.insert(0, genesis);
        Self {
            authority,
            history: RwLock::new(history),
        }
    }

    pub fn from_config(config: &AccountPlusConfig) -> Self {
        Self::new(config.genesis_params(), config.authority)
    }

    /// The only address allowed to change params.
    pub fn authority(&self) -> Address {
        self.authority
    }

    /// Params scheduled to be in force at the next block.
    ///
    /// Includes any write already made during the current block.
    pub fn pending_params(&self, ctx: &AnteContext) -> Params {
        self.params_at(ctx.block_height().saturating_add(1))
    }

    /// Governance entry point for toggling the circuit breaker.
    pub fn set_active_state(
        &self,
        ctx: &AnteContext,
        msg: &MsgSetActiveState,
    ) -> Result<(), ParamsError> {
        if msg.authority != self.authority {
            return Err(ParamsError::Unauthorized {
                expected: self.authority,
                actual: msg.authority,
            });
        }

        let mut params = self.pending_params(ctx);
        params.is_smart_account_active = msg.active;
        self.set_params(ctx, params);
        Ok(())
    }

    fn params_at(&self, height: u64) -> Params {
        self.history
            .read()
            .range(..=height)
            .next_back()
            .map(|(_, params)| *params)
            .unwrap_or_default()
    }
}

impl ParamsReader for InMemoryParamsKeeper {
    fn get_params(&self, ctx: &AnteContext) -> Params {
        self.params_at(ctx.block_height())
    }
}

impl ParamsKeeper for InMemoryParamsKeeper {
    fn set_params(&self, ctx: &AnteContext, params: Params) {
        let effective_height = ctx.block_height().saturating_add(1);
        self.history.write().insert(effective_height, params);

        info!(
            effective_height,
            is_smart_account_active = params.is_smart_account_active,
            "Account plus params updated"
        );
    }
}
