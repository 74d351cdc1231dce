//! In-memory account store for the classic signature path.

use crate::domain::ecdsa::address_from_pubkey;
use crate::domain::entities::{Account, AnteContext};
use crate::ports::outbound::AccountKeeper;
use parking_lot::RwLock;
use shared_types::{Address, PublicKey};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct InMemoryAccountKeeper {
    accounts: RwLock<HashMap<Address, Account>>,
}

impl InMemoryAccountKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account under the address derived from `pub_key`.
    ///
    /// Returns `None` if `pub_key` is not a valid secp256k1 point.
    pub fn add_account(&self, pub_key: PublicKey) -> Option<Address> {
        let address = address_from_pubkey(&pub_key)?;
        self.accounts.write().insert(
            address,
            Account {
                address,
                pub_key: Some(pub_key),
            },
        );
        Some(address)
    }

    /// Register an account that has not set a public key yet.
    pub fn add_keyless_account(&self, address: Address) {
        self.accounts.write().insert(
            address,
            Account {
                address,
                pub_key: None,
            },
        );
    }
}

impl AccountKeeper for InMemoryAccountKeeper {
    fn get_account(&self, _ctx: &AnteContext, address: &Address) -> Option<Account> {
        self.accounts.read().get(address).cloned()
    }
}
