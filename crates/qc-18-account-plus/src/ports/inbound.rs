//! # Inbound Ports (Ante Stage Contract)
//!
//! A stage receives the context, the transaction, the simulate flag and the
//! continuation `Next`. It either rejects with an `AnteError` or calls
//! `next.run(..)` and returns what the rest of the chain produced.
//!
//! ```text
//! AnteChain::handle ──→ [stage 0] ──next──→ [stage 1] ──next──→ ... ──→ Ok(ctx)
//! ```

use crate::domain::entities::AnteContext;
use crate::domain::errors::AnteError;
use shared_types::Transaction;
use std::sync::Arc;

/// A complete pre-processing pipeline.
pub trait AnteHandler: Send + Sync {
    fn handle(
        &self,
        ctx: AnteContext,
        tx: &Transaction,
        simulate: bool,
    ) -> Result<AnteContext, AnteError>;
}

/// One stage of the pre-processing pipeline.
///
/// Implementations must be thread-safe (`Send + Sync`); a single instance is
/// shared by every transaction.
pub trait AnteDecorator: Send + Sync {
    fn ante_handle(
        &self,
        ctx: AnteContext,
        tx: &Transaction,
        simulate: bool,
        next: Next<'_>,
    ) -> Result<AnteContext, AnteError>;
}

/// The remainder of the chain after the current stage.
#[derive(Clone, Copy)]
pub struct Next<'a> {
    remaining: &'a [Arc<dyn AnteDecorator>],
}

impl<'a> Next<'a> {
    pub fn new(remaining: &'a [Arc<dyn AnteDecorator>]) -> Self {
        Self { remaining }
    }

    /// A continuation with nothing left to run.
    pub fn terminal() -> Next<'static> {
        Next { remaining: &[] }
    }

    /// Number of stages still to run.
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Run the remaining stages. An exhausted chain returns `ctx` unchanged.
    pub fn run(
        self,
        ctx: AnteContext,
        tx: &Transaction,
        simulate: bool,
    ) -> Result<AnteContext, AnteError> {
        match self.remaining.split_first() {
            Some((stage, rest)) => stage.ante_handle(ctx, tx, simulate, Next::new(rest)),
            None => Ok(ctx),
        }
    }
}
