//! # Outbound Ports (Driven Ports / SPI)
//!
//! State the ante stages read: module params, account public keys and
//! registered authenticators.

use crate::domain::entities::{Account, AnteContext, Params};
use crate::domain::errors::AnteError;
use shared_types::{Address, Hash, Msg, Signature, Transaction};
use std::sync::Arc;

// =============================================================================
// Params
// =============================================================================

/// Read access to the account-plus params.
///
/// Reads are scoped by the context's block height so every transaction of a
/// block observes the same params.
pub trait ParamsReader: Send + Sync {
    fn get_params(&self, ctx: &AnteContext) -> Params;

    /// The circuit breaker flag at the context's height.
    fn is_smart_account_active(&self, ctx: &AnteContext) -> bool {
        self.get_params(ctx).is_smart_account_active
    }
}

/// Write access to the params.
///
/// Writes made while processing block `H` take effect at block `H + 1`.
pub trait ParamsKeeper: ParamsReader {
    fn set_params(&self, ctx: &AnteContext, params: Params);
}

// =============================================================================
// Accounts
// =============================================================================

/// Account lookups for the classic signature path.
pub trait AccountKeeper: Send + Sync {
    fn get_account(&self, ctx: &AnteContext, address: &Address) -> Option<Account>;
}

// =============================================================================
// Authenticators
// =============================================================================

/// Everything an authenticator may inspect for one message.
#[derive(Debug, Clone)]
pub struct AuthenticationRequest<'a> {
    /// The message signer whose authenticator is running.
    pub account: Address,
    /// The selected authenticator id.
    pub authenticator_id: u64,
    /// Index of `msg` within the transaction.
    pub msg_index: usize,
    pub msg: &'a Msg,
    pub tx: &'a Transaction,
    /// `tx.sign_bytes(chain_id)`, computed once per transaction.
    pub sign_bytes: Hash,
    /// The signature provided for `account`, if any.
    pub signature: Option<&'a Signature>,
    pub simulate: bool,
}

/// A pluggable per-account authentication rule.
pub trait Authenticator: Send + Sync {
    /// Short identifier of the authenticator kind, e.g. `"SignatureVerification"`.
    fn kind(&self) -> &'static str;

    fn authenticate(&self, request: &AuthenticationRequest<'_>) -> Result<(), AnteError>;
}

/// Registry of authenticators, keyed by account and id.
pub trait AuthenticatorStore: Send + Sync {
    fn get_authenticator(&self, account: &Address, id: u64) -> Option<Arc<dyn Authenticator>>;
}

// =============================================================================
// Test Doubles
// =============================================================================

/// Params reader returning a fixed value at every height.
#[cfg(test)]
pub struct FixedParams(pub Params);

#[cfg(test)]
impl FixedParams {
    pub fn active(active: bool) -> Self {
        Self(Params {
            is_smart_account_active: active,
        })
    }
}

#[cfg(test)]
impl ParamsReader for FixedParams {
    fn get_params(&self, _ctx: &AnteContext) -> Params {
        self.0
    }
}
