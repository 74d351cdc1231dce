//! # Adapters
//!
//! Concrete collaborators of the circuit breaker:
//! - `params_keeper`: height-indexed params store (activation flag)
//! - `account_keeper`: account public keys for the classic path
//! - `sig_verification`: classic signature stage
//! - `authenticator`: smart authentication stage and authenticator registry

pub mod account_keeper;
pub mod authenticator;
pub mod params_keeper;
pub mod sig_verification;

pub use account_keeper::InMemoryAccountKeeper;
pub use authenticator::{
    AuthenticatorDecorator, InMemoryAuthenticatorStore, SignatureVerificationAuthenticator,
};
pub use params_keeper::InMemoryParamsKeeper;
pub use sig_verification::SigVerificationDecorator;
