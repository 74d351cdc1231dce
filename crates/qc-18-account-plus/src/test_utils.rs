//! Key material and transaction builders shared by unit and integration tests.

use crate::domain::ecdsa::address_from_verifying_key;
use crate::domain::extension::TxExtension;
use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::ecdsa::{Signature as K256Signature, SigningKey};
use shared_types::{Address, Any, Hash, Msg, PublicKey, Signature, Transaction, TxBody};

/// A secp256k1 keypair with its derived address.
#[derive(Clone)]
pub struct TestKey {
    pub signing_key: SigningKey,
    pub pub_key: PublicKey,
    pub address: Address,
}

/// Generate a random keypair.
pub fn generate_keypair() -> TestKey {
    let signing_key = SigningKey::random(&mut rand::thread_rng());
    let verifying_key = *signing_key.verifying_key();

    let mut pub_key = [0u8; 33];
    pub_key.copy_from_slice(verifying_key.to_encoded_point(true).as_bytes());

    TestKey {
        address: address_from_verifying_key(&verifying_key),
        signing_key,
        pub_key,
    }
}

/// Sign a prehash, normalized to low S.
pub fn sign(hash: &Hash, signing_key: &SigningKey) -> Signature {
    let sig: K256Signature = signing_key.sign_prehash(hash).expect("signing failed");
    let sig = sig.normalize_s().unwrap_or(sig);

    let mut out = [0u8; 64];
    out.copy_from_slice(&sig.to_bytes());
    out
}

/// A `/qc.bank.MsgSend`-style message signed by `signer`.
pub fn send_msg(signer: Address, to: Address) -> Msg {
    Msg {
        type_url: "/qc.bank.MsgSend".to_string(),
        signer,
        payload: to.to_vec(),
    }
}

/// Build a transaction and sign it with `keys` in `signers()` order.
///
/// A non-empty `selected` attaches a `TxExtension`; an empty one attaches
/// nothing.
pub fn signed_tx(
    chain_id: &str,
    messages: Vec<Msg>,
    keys: &[&TestKey],
    selected: Vec<u64>,
) -> Transaction {
    let options: Vec<Any> = if selected.is_empty() {
        Vec::new()
    } else {
        vec![TxExtension::new(selected)
            .to_any()
            .expect("extension encoding failed")]
    };

    let mut tx = Transaction {
        body: TxBody {
            messages,
            non_critical_extension_options: options,
            ..Default::default()
        },
        signatures: Vec::new(),
    };

    let sign_bytes = tx.sign_bytes(chain_id);
    tx.signatures = keys
        .iter()
        .map(|key| sign(&sign_bytes, &key.signing_key))
        .collect();
    tx
}
