//! # Smart Authentication Stage
//!
//! The pluggable path: message `i` is authorized by the authenticator whose id
//! is `selected_authenticators[i]`, looked up under that message's signer.
//!
//! ```text
//! messages:   [ m0 (alice) , m1 (bob) , m2 (alice) ]
//! selected:   [     3      ,    0     ,     5      ]
//!                  │            │           │
//!          store(alice,3) store(bob,0) store(alice,5) ──→ authenticate(..)
//! ```
//!
//! Also provides an in-memory authenticator registry and a signature-checking
//! authenticator that mirrors the classic path for a single key.

use crate::domain::ecdsa::verify_signature;
use crate::domain::entities::AnteContext;
use crate::domain::errors::AnteError;
use crate::domain::extension::selected_authenticators;
use crate::ports::inbound::{AnteDecorator, Next};
use crate::ports::outbound::{AuthenticationRequest, Authenticator, AuthenticatorStore};
use parking_lot::RwLock;
use shared_types::{Address, PublicKey, Transaction};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

// =============================================================================
// DECORATOR
// =============================================================================

/// Smart authentication stage.
pub struct AuthenticatorDecorator<S: AuthenticatorStore> {
    store: Arc<S>,
}

impl<S: AuthenticatorStore> AuthenticatorDecorator<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn authenticate(
        &self,
        ctx: &AnteContext,
        tx: &Transaction,
        simulate: bool,
    ) -> Result<(), AnteError> {
        let messages = tx.messages();
        if messages.is_empty() {
            return Err(AnteError::EmptyTransaction);
        }

        let selected = selected_authenticators(tx);
        if selected.len() != messages.len() {
            return Err(AnteError::SelectionLengthMismatch {
                selected: selected.len(),
                messages: messages.len(),
            });
        }

        let sign_bytes = tx.sign_bytes(ctx.chain_id());

        for (msg_index, (msg, &id)) in messages.iter().zip(&selected).enumerate() {
            let authenticator = self.store.get_authenticator(&msg.signer, id).ok_or(
                AnteError::AuthenticatorNotFound {
                    account: msg.signer,
                    id,
                },
            )?;

            let request = AuthenticationRequest {
                account: msg.signer,
                authenticator_id: id,
                msg_index,
                msg,
                tx,
                sign_bytes,
                signature: tx.signature_for(&msg.signer),
                simulate,
            };
            authenticator.authenticate(&request)?;

            debug!(
                msg_index,
                authenticator_id = id,
                kind = authenticator.kind(),
                "Message authenticated"
            );
        }

        Ok(())
    }
}

impl<S: AuthenticatorStore> AnteDecorator for AuthenticatorDecorator<S> {
    fn ante_handle(
        &self,
        ctx: AnteContext,
        tx: &Transaction,
        simulate: bool,
        next: Next<'_>,
    ) -> Result<AnteContext, AnteError> {
        self.authenticate(&ctx, tx, simulate)?;
        next.run(ctx, tx, simulate)
    }
}

// =============================================================================
// REGISTRY
// =============================================================================

/// Authenticator registry with chain-wide id allocation.
#[derive(Default)]
pub struct InMemoryAuthenticatorStore {
    next_id: AtomicU64,
    authenticators: RwLock<HashMap<Address, BTreeMap<u64, Arc<dyn Authenticator>>>>,
}

impl InMemoryAuthenticatorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `authenticator` for `account` and return its id.
    pub fn add_authenticator(
        &self,
        account: Address,
        authenticator: Arc<dyn Authenticator>,
    ) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.authenticators
            .write()
            .entry(account)
            .or_default()
            .insert(id, authenticator);
        id
    }

    /// Remove an authenticator. Returns false if it was not registered.
    pub fn remove_authenticator(&self, account: &Address, id: u64) -> bool {
        self.authenticators
            .write()
            .get_mut(account)
            .map(|by_id| by_id.remove(&id).is_some())
            .unwrap_or(false)
    }

    /// Ids registered for `account`, ascending.
    pub fn authenticator_ids(&self, account: &Address) -> Vec<u64> {
        self.authenticators
            .read()
            .get(account)
            .map(|by_id| by_id.keys().copied().collect())
            .unwrap_or_default()
    }
}

impl AuthenticatorStore for InMemoryAuthenticatorStore {
    fn get_authenticator(&self, account: &Address, id: u64) -> Option<Arc<dyn Authenticator>> {
        self.authenticators
            .read()
            .get(account)
            .and_then(|by_id| by_id.get(&id))
            .cloned()
    }
}

// =============================================================================
// SIGNATURE AUTHENTICATOR
// =============================================================================

/// Accepts a message when the signer's signature verifies against `pub_key`.
#[derive(Debug, Clone)]
pub struct SignatureVerificationAuthenticator {
    pub_key: PublicKey,
}

impl SignatureVerificationAuthenticator {
    pub fn new(pub_key: PublicKey) -> Self {
        Self { pub_key }
    }
}

impl Authenticator for SignatureVerificationAuthenticator {
    fn kind(&self) -> &'static str {
        "SignatureVerification"
    }

    fn authenticate(&self, request: &AuthenticationRequest<'_>) -> Result<(), AnteError> {
        if request.simulate {
            return Ok(());
        }

        let unauthorized = |reason: &str| AnteError::Unauthorized {
            id: request.authenticator_id,
            msg_index: request.msg_index,
            reason: reason.to_string(),
        };

        let signature = request
            .signature
            .ok_or_else(|| unauthorized("missing signature"))?;

        if !verify_signature(&self.pub_key, &request.sign_bytes, signature) {
            return Err(unauthorized("signature verification failed"));
        }
        Ok(())
    }
}
