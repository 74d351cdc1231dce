//! # Service Layer
//!
//! - `chain`: composes stages into an `AnteHandler`
//! - `circuit_breaker`: routes each transaction to the classic or smart stage

pub mod chain;
pub mod circuit_breaker;

pub use chain::{chain_decorators, AnteChain};
pub use circuit_breaker::CircuitBreakerDecorator;
