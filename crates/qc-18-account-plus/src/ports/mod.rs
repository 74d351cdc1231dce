//! # Ports Layer
//!
//! - **Inbound (Driving)**: the ante stage contract every stage implements
//! - **Outbound (Driven)**: params, accounts and authenticators the stages read

pub mod inbound;
pub mod outbound;
