//! # Account Plus Errors
//!
//! `AnteError` is what a pre-processing stage returns when it rejects a
//! transaction. The circuit breaker never constructs one itself: it hands the
//! chosen stage's error back untouched.

use shared_types::Address;
use thiserror::Error;

/// Errors raised by ante stages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnteError {
    /// The transaction carries no messages, so it has no signers.
    #[error("Transaction has no messages")]
    EmptyTransaction,

    /// Signature count differs from the number of unique signers.
    #[error("Wrong number of signatures: expected {expected}, got {actual}")]
    SignatureCountMismatch { expected: usize, actual: usize },

    /// Signer has no account.
    #[error("Unknown account {}", hex::encode(.0))]
    UnknownAccount(Address),

    /// Account exists but has never set a public key.
    #[error("Account {} has no public key", hex::encode(.0))]
    PubKeyMissing(Address),

    /// Stored public key is not a valid secp256k1 point.
    #[error("Account {} has an invalid public key", hex::encode(.0))]
    InvalidPubKey(Address),

    /// Signature did not verify against the signer's public key.
    #[error("Signature verification failed for {}", hex::encode(.0))]
    SignatureVerificationFailed(Address),

    /// Smart path needs one authenticator id per message.
    #[error("Selected {selected} authenticators for {messages} messages")]
    SelectionLengthMismatch { selected: usize, messages: usize },

    /// No authenticator with this id is registered for the account.
    #[error("Authenticator {id} not found for account {}", hex::encode(.account))]
    AuthenticatorNotFound { account: Address, id: u64 },

    /// An authenticator refused the message.
    #[error("Authenticator {id} rejected message {msg_index}: {reason}")]
    Unauthorized {
        id: u64,
        msg_index: usize,
        reason: String,
    },
}

/// Errors raised by the params update path.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParamsError {
    /// Only the governance authority may change params.
    #[error(
        "Unauthorized params update: expected authority {}, got {}",
        hex::encode(.expected),
        hex::encode(.actual)
    )]
    Unauthorized { expected: Address, actual: Address },
}
