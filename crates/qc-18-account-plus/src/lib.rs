//! # Account Plus Subsystem (QC-18)
//!
//! Smart-account authentication for the transaction pre-processing (ante)
//! pipeline, behind a governance-controlled circuit breaker.
//!
//! ## Routing
//!
//! | `is_smart_account_active` | `TxExtension.selected_authenticators` | Stage |
//! |---------------------------|---------------------------------------|-------|
//! | false | anything | classic signatures |
//! | true | absent / empty / malformed | classic signatures |
//! | true | non-empty | smart authenticators |
//!
//! ## Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Exactly one authentication stage per tx | `service/circuit_breaker.rs` - single `match` |
//! | Flag read before the extension | `domain/routing.rs` - `RoutingDecision::decide` |
//! | Malformed extension never errors | `domain/extension.rs` - `SelectionLookup::into_selection` |
//! | Flag constant within a block | `adapters/params_keeper.rs` - writes land at `H + 1` |
//! | Only governance changes params | `adapters/params_keeper.rs` - `set_active_state` |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  adapters/ - params keeper, account keeper, classic + smart     │
//! │              authentication stages, authenticator registry      │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ports/inbound.rs  - AnteDecorator, AnteHandler, Next           │
//! │  ports/outbound.rs - ParamsReader, AccountKeeper, Authenticator │
//! │  service/          - AnteChain, CircuitBreakerDecorator         │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  domain/ - routing decision, tx extension, entities, ecdsa      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod metrics;
pub mod ports;
pub mod service;

/// Keypairs and signed transaction builders.
/// Requires feature: `test-utils`
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export public API
pub use config::{AccountPlusConfig, ConfigError};
pub use domain::entities::{Account, AnteContext, MsgSetActiveState, Params};
pub use domain::errors::{AnteError, ParamsError};
pub use domain::extension::{
    lookup_selection, selected_authenticators, SelectionLookup, TxExtension, TX_EXTENSION_TYPE_URL,
};
pub use domain::routing::RoutingDecision;
pub use metrics::{RoutingMetrics, RoutingMetricsSnapshot};
pub use ports::inbound::{AnteDecorator, AnteHandler, Next};
pub use ports::outbound::{
    AccountKeeper, AuthenticationRequest, Authenticator, AuthenticatorStore, ParamsKeeper,
    ParamsReader,
};
pub use service::{chain_decorators, AnteChain, CircuitBreakerDecorator};
