//! # Shared Types Crate
//!
//! Transaction entities consumed by the pre-processing (ante) pipeline.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every stage sees the same `Transaction` shape.
//! - **Signed vs. Auxiliary Data**: `Transaction::sign_bytes` commits to the
//!   messages, memo and timeout only. Extension options ride alongside the
//!   body unsigned and are never trusted for anything but routing hints.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
