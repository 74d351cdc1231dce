//! # Classic Signature Verification Stage
//!
//! The fixed authentication path: every unique message signer must provide a
//! secp256k1 signature over `Transaction::sign_bytes`, in `signers()` order,
//! made with the public key stored on its account.
//!
//! In simulate mode the accounts and signature count are still checked but
//! the signatures themselves are not, so clients can estimate gas with
//! placeholder signatures.

use crate::domain::ecdsa::{verify_signature, verifying_key};
use crate::domain::entities::AnteContext;
use crate::domain::errors::AnteError;
use crate::ports::inbound::{AnteDecorator, Next};
use crate::ports::outbound::AccountKeeper;
use shared_types::Transaction;
use std::sync::Arc;
use tracing::debug;

/// Classic authentication stage.
pub struct SigVerificationDecorator<K: AccountKeeper> {
    accounts: Arc<K>,
}

impl<K: AccountKeeper> SigVerificationDecorator<K> {
    pub fn new(accounts: Arc<K>) -> Self {
        Self { accounts }
    }

    fn verify(&self, ctx: &AnteContext, tx: &Transaction, simulate: bool) -> Result<(), AnteError> {
        let signers = tx.signers();
        if signers.is_empty() {
            return Err(AnteError::EmptyTransaction);
        }
        if tx.signatures.len() != signers.len() {
            return Err(AnteError::SignatureCountMismatch {
                expected: signers.len(),
                actual: tx.signatures.len(),
            });
        }

        let sign_bytes = tx.sign_bytes(ctx.chain_id());

        for (signer, signature) in signers.iter().zip(&tx.signatures) {
            let account = self
                .accounts
                .get_account(ctx, signer)
                .ok_or(AnteError::UnknownAccount(*signer))?;
            let pub_key = account.pub_key.ok_or(AnteError::PubKeyMissing(*signer))?;

            if verifying_key(&pub_key).is_none() {
                return Err(AnteError::InvalidPubKey(*signer));
            }
            if simulate {
                continue;
            }
            if !verify_signature(&pub_key, &sign_bytes, signature) {
                return Err(AnteError::SignatureVerificationFailed(*signer));
            }
        }

        Ok(())
    }
}

impl<K: AccountKeeper> AnteDecorator for SigVerificationDecorator<K> {
    fn ante_handle(
        &self,
        ctx: AnteContext,
        tx: &Transaction,
        simulate: bool,
        next: Next<'_>,
    ) -> Result<AnteContext, AnteError> {
        self.verify(&ctx, tx, simulate)?;

        debug!(
            height = ctx.block_height(),
            signers = tx.signatures.len(),
            "Classic signatures verified"
        );

        next.run(ctx, tx, simulate)
    }
}
