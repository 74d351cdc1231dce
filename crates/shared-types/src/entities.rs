//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Primitives**: `Hash`, `Address`, `PublicKey`, `Signature`
//! - **Containers**: `Any` (type-tagged opaque payload)
//! - **Transactions**: `Msg`, `TxBody`, `Transaction`

use crate::errors::DecodeError;
use bincode::Options;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use sha3::{Digest, Keccak256};

// =============================================================================
// PRIMITIVES
// =============================================================================

/// A 32-byte hash (Keccak-256).
pub type Hash = [u8; 32];

/// A 64-byte secp256k1 ECDSA signature (r || s).
pub type Signature = [u8; 64];

/// A 33-byte compressed secp256k1 public key.
pub type PublicKey = [u8; 33];

/// A 20-byte account address (last 20 bytes of keccak256 of the public key).
pub type Address = [u8; 20];

/// Keccak-256 of arbitrary bytes.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

// =============================================================================
// ANY
// =============================================================================

/// Upper bound on an encoded `Any` payload.
pub const MAX_ANY_PAYLOAD_BYTES: u64 = 64 * 1024;

/// Fixed-width little-endian bincode that rejects oversized or trailing input.
fn any_codec() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
        .with_limit(MAX_ANY_PAYLOAD_BYTES)
}

/// A type-tagged opaque payload.
///
/// Used for transaction extension options: the receiver decides by `type_url`
/// whether it understands the payload, and decodes `value` only if it does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Any {
    /// Fully-qualified type name, e.g. `/qc.accountplus.TxExtension`.
    pub type_url: String,
    /// Encoded payload bytes.
    pub value: Vec<u8>,
}

impl Any {
    /// Wrap raw bytes under a type URL.
    pub fn new(type_url: impl Into<String>, value: Vec<u8>) -> Self {
        Self {
            type_url: type_url.into(),
            value,
        }
    }

    /// Encode `payload` with bincode and tag it with `type_url`.
    pub fn pack<T: Serialize>(type_url: &str, payload: &T) -> Result<Self, DecodeError> {
        let value = any_codec().serialize(payload).map_err(|e| DecodeError::Encode {
            type_url: type_url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::new(type_url, value))
    }

    /// Decode the payload, refusing anything not tagged `expected_type_url`.
    ///
    /// The payload must decode exactly: trailing bytes are malformed.
    pub fn unpack<T: DeserializeOwned>(&self, expected_type_url: &str) -> Result<T, DecodeError> {
        if self.type_url != expected_type_url {
            return Err(DecodeError::TypeUrlMismatch {
                expected: expected_type_url.to_string(),
                actual: self.type_url.clone(),
            });
        }
        any_codec().deserialize(&self.value).map_err(|e| DecodeError::Malformed {
            type_url: self.type_url.clone(),
            reason: e.to_string(),
        })
    }
}

// =============================================================================
// TRANSACTIONS
// =============================================================================

/// A single state-transition request inside a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Msg {
    /// Message type, e.g. `/qc.bank.MsgSend`.
    pub type_url: String,
    /// The account that must authorize this message.
    pub signer: Address,
    /// Encoded message body.
    pub payload: Vec<u8>,
}

/// The body of a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxBody {
    /// Messages executed in order.
    pub messages: Vec<Msg>,
    /// Free-form note.
    pub memo: String,
    /// Block height after which the transaction is no longer valid (0 = none).
    pub timeout_height: u64,
    /// Optional auxiliary data. Not covered by the signatures.
    pub non_critical_extension_options: Vec<Any>,
}

/// A transaction as received from the network.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// The transaction body.
    pub body: TxBody,
    /// One signature per signer, in `signers()` order.
    #[serde_as(as = "Vec<Bytes>")]
    pub signatures: Vec<Signature>,
}

impl Transaction {
    /// Returns the messages of this transaction.
    pub fn messages(&self) -> &[Msg] {
        &self.body.messages
    }

    /// Returns the non-critical extension options.
    pub fn extension_options(&self) -> &[Any] {
        &self.body.non_critical_extension_options
    }

    /// Unique message signers in first-seen order.
    pub fn signers(&self) -> Vec<Address> {
        let mut signers: Vec<Address> = Vec::with_capacity(self.body.messages.len());
        for msg in &self.body.messages {
            if !signers.contains(&msg.signer) {
                signers.push(msg.signer);
            }
        }
        signers
    }

    /// Position of `signer` in `signers()`, which is also the index of its signature.
    pub fn signer_index(&self, signer: &Address) -> Option<usize> {
        self.signers().iter().position(|s| s == signer)
    }

    /// The signature provided for `signer`, if any.
    pub fn signature_for(&self, signer: &Address) -> Option<&Signature> {
        self.signer_index(signer)
            .and_then(|index| self.signatures.get(index))
    }

    /// The digest every signer signs.
    ///
    /// Covers the chain id, every message, the memo and the timeout height.
    /// Extension options are deliberately excluded.
    pub fn sign_bytes(&self, chain_id: &str) -> Hash {
        let mut hasher = Keccak256::new();

        update_prefixed(&mut hasher, chain_id.as_bytes());
        hasher.update((self.body.messages.len() as u64).to_le_bytes());
        for msg in &self.body.messages {
            update_prefixed(&mut hasher, msg.type_url.as_bytes());
            hasher.update(msg.signer);
            update_prefixed(&mut hasher, &msg.payload);
        }
        update_prefixed(&mut hasher, self.body.memo.as_bytes());
        hasher.update(self.body.timeout_height.to_le_bytes());

        hasher.finalize().into()
    }
}

/// Length-prefixed update so adjacent variable-length fields cannot collide.
fn update_prefixed(hasher: &mut Keccak256, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}
