//! Key id derivation

use crate::{
    error::KeyToolResult,
    pem,
    types::{KeyId, KeyKind},
};
use sha2::{Digest, Sha256};

/// Derive `product:<hex sha-256>` from a public key PEM
///
/// # Errors
/// Returns `KeyToolError::Encoding` if the PEM cannot be decoded.
pub fn derive_key_id(public_key_pem: &str) -> KeyToolResult<KeyId> {
    let der = pem::decode(public_key_pem, KeyKind::Public)?;
    Ok(key_id_from_der(&der))
}

/// Key id of raw SPKI DER bytes
#[must_use]
pub fn key_id_from_der(der: &[u8]) -> KeyId {
    KeyId::from_digest(&Sha256::digest(der))
}
