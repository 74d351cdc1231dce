//! # Transaction Extension
//!
//! Reads the authenticator selection a transaction author attached in the
//! non-critical extension options.
//!
//! Every path through this module is total: absent, empty and malformed
//! extensions all normalize to an empty selection. The lookup never touches
//! account or authenticator state.

use serde::{Deserialize, Serialize};
use shared_types::{Any, DecodeError, Transaction};

/// Type URL under which the extension is packed.
pub const TX_EXTENSION_TYPE_URL: &str = "/qc.accountplus.TxExtension";

/// Auxiliary per-transaction data for the smart-account path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxExtension {
    /// One authenticator id per message, in message order.
    pub selected_authenticators: Vec<u64>,
}

impl TxExtension {
    pub fn new(selected_authenticators: Vec<u64>) -> Self {
        Self {
            selected_authenticators,
        }
    }

    /// Pack into an extension option.
    pub fn to_any(&self) -> Result<Any, DecodeError> {
        Any::pack(TX_EXTENSION_TYPE_URL, self)
    }
}

/// Raw outcome of looking for the extension, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionLookup {
    /// No option carries `TX_EXTENSION_TYPE_URL`.
    Absent,
    /// The option exists but its payload does not decode.
    Malformed(DecodeError),
    /// The option decoded; the selection may still be empty.
    Present(Vec<u64>),
}

impl SelectionLookup {
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }

    /// Fail-open normalization: anything but a decoded selection is empty.
    pub fn into_selection(self) -> Vec<u64> {
        match self {
            Self::Present(selection) => selection,
            Self::Absent | Self::Malformed(_) => Vec::new(),
        }
    }
}

/// Find and decode the first extension option tagged `TX_EXTENSION_TYPE_URL`.
///
/// Options with other type URLs are ignored; only the first matching option
/// is considered.
pub fn lookup_selection(tx: &Transaction) -> SelectionLookup {
    let Some(option) = tx
        .extension_options()
        .iter()
        .find(|any| any.type_url == TX_EXTENSION_TYPE_URL)
    else {
        return SelectionLookup::Absent;
    };

    match option.unpack::<TxExtension>(TX_EXTENSION_TYPE_URL) {
        Ok(extension) => SelectionLookup::Present(extension.selected_authenticators),
        Err(e) => SelectionLookup::Malformed(e),
    }
}

/// The authenticator ids selected by `tx`, or an empty vector.
pub fn selected_authenticators(tx: &Transaction) -> Vec<u64> {
    lookup_selection(tx).into_selection()
}
