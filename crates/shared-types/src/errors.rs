//! # Error Types
//!
//! Errors raised while packing or unpacking `Any` payloads.

use thiserror::Error;

/// Errors that can occur when converting between `Any` and a typed payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The `Any` carries a different type than the caller asked for.
    #[error("Type URL mismatch: expected {expected}, got {actual}")]
    TypeUrlMismatch { expected: String, actual: String },

    /// The payload bytes could not be decoded.
    #[error("Malformed payload for {type_url}: {reason}")]
    Malformed { type_url: String, reason: String },

    /// The payload could not be encoded.
    #[error("Failed to encode {type_url}: {reason}")]
    Encode { type_url: String, reason: String },
}
