//! # ECDSA Verification (secp256k1)
//!
//! Signature checks used by the classic path and by the signature
//! authenticator of the smart path.
//!
//! ## Security Notes
//!
//! - **Malleability Prevention (EIP-2)**: high-S signatures are rejected
//! - Verification is over the 32-byte prehash produced by `Transaction::sign_bytes`

use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{Signature as K256Signature, VerifyingKey};
use shared_types::{keccak256, Address, Hash, PublicKey, Signature};

/// Parse a compressed SEC1 public key.
pub fn verifying_key(pub_key: &PublicKey) -> Option<VerifyingKey> {
    VerifyingKey::from_sec1_bytes(pub_key).ok()
}

/// Address of a verifying key: last 20 bytes of keccak256 over the
/// uncompressed point without its 0x04 prefix.
pub fn address_from_verifying_key(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Address of a compressed public key, if the key is a valid curve point.
pub fn address_from_pubkey(pub_key: &PublicKey) -> Option<Address> {
    verifying_key(pub_key).map(|key| address_from_verifying_key(&key))
}

/// Verify `signature` over `sign_bytes` against `pub_key`.
///
/// Returns false for unparseable keys or signatures and for high-S signatures.
pub fn verify_signature(pub_key: &PublicKey, sign_bytes: &Hash, signature: &Signature) -> bool {
    let Some(key) = verifying_key(pub_key) else {
        return false;
    };
    let Ok(sig) = K256Signature::from_slice(signature) else {
        return false;
    };

    // normalize_s returns Some only when s is in the upper half
    if sig.normalize_s().is_some() {
        return false;
    }

    key.verify_prehash(sign_bytes, &sig).is_ok()
}
