//! ES256 key pair generation for ECDSA P-256

use crate::{
    crypto::key_id::key_id_from_der,
    error::{KeyToolError, KeyToolResult},
    pem,
    types::{KeyKind, KeyPair},
};
use keytool_common::LoggingTransformer;
use p256::{
    SecretKey,
    pkcs8::{EncodePrivateKey, EncodePublicKey},
};
use rand::Rng;
use zeroize::Zeroize;

/// Generate a P-256 key pair, PKCS8 private half and SPKI public half, as PEM
///
/// # Errors
/// Returns `KeyToolError::KeyGeneration` if the drawn scalar is not a valid
/// P-256 secret or either half cannot be exported.
pub fn generate_keypair() -> KeyToolResult<KeyPair> {
    let mut rng = rand::rng();
    let mut private_key_bytes = [0u8; 32];
    rng.fill(&mut private_key_bytes);

    let secret_key = SecretKey::from_slice(&private_key_bytes);
    private_key_bytes.zeroize();
    let secret_key = secret_key.map_err(|e| {
        KeyToolError::key_generation(&format!("Failed to create P-256 secret key: {e}"))
    })?;

    let private_der = secret_key.to_pkcs8_der().map_err(|e| {
        KeyToolError::key_generation(&format!("Failed to export PKCS8 private key: {e}"))
    })?;
    let public_der = secret_key.public_key().to_public_key_der().map_err(|e| {
        KeyToolError::key_generation(&format!("Failed to export SPKI public key: {e}"))
    })?;

    let kid = key_id_from_der(public_der.as_bytes());
    LoggingTransformer::log_key_generation(kid.as_str());

    Ok(KeyPair {
        public_key_pem: pem::encode(public_der.as_bytes(), KeyKind::Public),
        private_key_pem: pem::encode(private_der.as_bytes(), KeyKind::Private),
    })
}
