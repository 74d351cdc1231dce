//! # Routing Decision
//!
//! Chooses between the classic and the smart authentication stage.
//!
//! ```text
//! flag off ───────────────────────────────→ Classic
//! flag on ──→ selection empty / absent ───→ Classic
//!         └─→ selection non-empty ────────→ Smart
//! ```
//!
//! The flag is checked before the selection is looked at; with the breaker
//! open the transaction's extension is never read.

use std::fmt;

/// Which authentication stage handles a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutingDecision {
    /// Built-in signature verification.
    Classic,
    /// Per-account pluggable authenticators.
    Smart,
}

impl RoutingDecision {
    /// Decide from the activation flag and a lazily-read selection.
    ///
    /// `selection` is only called when `smart_account_active` is true.
    pub fn decide<F>(smart_account_active: bool, selection: F) -> Self
    where
        F: FnOnce() -> Vec<u64>,
    {
        if !smart_account_active {
            return Self::Classic;
        }

        if selection().is_empty() {
            Self::Classic
        } else {
            Self::Smart
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Smart => "smart",
        }
    }
}

impl fmt::Display for RoutingDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
