//! # Domain Entities
//!
//! The processing context threaded through the ante chain, the module params
//! that hold the smart-account activation flag, and the governance message
//! that toggles it.

use serde::{Deserialize, Serialize};
use shared_types::{Address, PublicKey};

// =============================================================================
// Processing Context
// =============================================================================

/// Per-transaction processing context.
///
/// Stages take the context by value and return the (possibly updated) context
/// on success, so a failed stage leaves the caller's copy untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnteContext {
    chain_id: String,
    block_height: u64,
    priority: i64,
    is_check_tx: bool,
    gas_limit: u64,
}

impl AnteContext {
    /// Context for a transaction delivered in block `block_height`.
    pub fn new(chain_id: impl Into<String>, block_height: u64) -> Self {
        Self {
            chain_id: chain_id.into(),
            block_height,
            priority: 0,
            is_check_tx: false,
            gas_limit: 0,
        }
    }

    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    pub fn block_height(&self) -> u64 {
        self.block_height
    }

    /// Mempool ordering priority accumulated by the stages.
    pub fn priority(&self) -> i64 {
        self.priority
    }

    /// True during mempool admission, false during block delivery.
    pub fn is_check_tx(&self) -> bool {
        self.is_check_tx
    }

    pub fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_block_height(mut self, block_height: u64) -> Self {
        self.block_height = block_height;
        self
    }

    pub fn with_check_tx(mut self, is_check_tx: bool) -> Self {
        self.is_check_tx = is_check_tx;
        self
    }

    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }
}

// =============================================================================
// Module Params
// =============================================================================

/// Consensus params of the account-plus module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Params {
    /// Circuit breaker switch. When false every transaction takes the classic
    /// signature path regardless of what it selects.
    pub is_smart_account_active: bool,
}

/// Governance message that flips the activation flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSetActiveState {
    /// Must equal the keeper's configured authority.
    pub authority: Address,
    pub active: bool,
}

// =============================================================================
// Accounts
// =============================================================================

/// The slice of account state the classic path needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub address: Address,
    /// `None` until the account's first signed transaction sets it.
    pub pub_key: Option<PublicKey>,
}
