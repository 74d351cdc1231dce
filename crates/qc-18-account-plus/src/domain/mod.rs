//! # Domain Layer
//!
//! Pure routing and verification logic with no I/O dependencies.

pub mod ecdsa;
pub mod entities;
pub mod errors;
pub mod extension;
pub mod routing;
