//! Stage composition.

use crate::domain::entities::AnteContext;
use crate::domain::errors::AnteError;
use crate::ports::inbound::{AnteDecorator, AnteHandler, Next};
use shared_types::Transaction;
use std::sync::Arc;

/// An ordered list of stages run as one handler.
#[derive(Clone, Default)]
pub struct AnteChain {
    decorators: Vec<Arc<dyn AnteDecorator>>,
}

impl AnteChain {
    pub fn new(decorators: Vec<Arc<dyn AnteDecorator>>) -> Self {
        Self { decorators }
    }

    pub fn len(&self) -> usize {
        self.decorators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorators.is_empty()
    }
}

impl AnteHandler for AnteChain {
    fn handle(
        &self,
        ctx: AnteContext,
        tx: &Transaction,
        simulate: bool,
    ) -> Result<AnteContext, AnteError> {
        Next::new(&self.decorators).run(ctx, tx, simulate)
    }
}

/// Chain `decorators` in order: the first one runs first and receives the
/// rest as its continuation.
pub fn chain_decorators(decorators: Vec<Arc<dyn AnteDecorator>>) -> AnteChain {
    AnteChain::new(decorators)
}
