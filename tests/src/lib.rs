//! # Quantum-Chain Account Plus Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── circuit_breaker.rs      # Routing with counting mock stages
//!     └── authentication_flow.rs  # Full ante chain with real stages
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p qc-tests
//! RUST_LOG=debug cargo test -p qc-tests -- --nocapture
//! ```

#![allow(dead_code)]


/// Install a test subscriber honoring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
