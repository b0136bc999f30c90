//! ES256 signing with ECDSA P-256

use crate::{
    claims::TokenClaims,
    error::{KeyToolError, KeyToolResult},
    pem,
    types::{AccessToken, JwsHeader, KeyKind},
};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use p256::{
    ecdsa::{Signature, SigningKey, signature::Signer},
    pkcs8::DecodePrivateKey,
};

/// Import a PKCS8 PEM private key as an ES256 signing key
///
/// # Errors
/// Returns `KeyToolError::KeyImport` if the PEM is malformed or the DER is
/// not a PKCS8 encoded P-256 private key.
pub fn import_signing_key(private_key_pem: &str) -> KeyToolResult<SigningKey> {
    let der = pem::decode(private_key_pem, KeyKind::Private)
        .map_err(|e| KeyToolError::key_import(&e.to_string()))?;

    SigningKey::from_pkcs8_der(&der)
        .map_err(|e| KeyToolError::key_import(&format!("Invalid PKCS8 P-256 private key: {e}")))
}

/// Sign header and claims into a compact JWS
///
/// The signature segment is the fixed size `R || S` encoding (64 bytes)
/// required by ES256, not ASN.1 DER.
///
/// # Errors
/// Returns `KeyToolError::Signing` if serialization or signing fails.
pub fn es256_sign(
    signing_key: &SigningKey,
    header: &JwsHeader,
    claims: &TokenClaims,
) -> KeyToolResult<AccessToken> {
    let header_json = serde_json::to_vec(header)
        .map_err(|e| KeyToolError::signing(&format!("Failed to serialize header: {e}")))?;
    let header_b64 = URL_SAFE_NO_PAD.encode(&header_json);

    let claims_json = serde_json::to_vec(claims)
        .map_err(|e| KeyToolError::signing(&format!("Failed to serialize claims: {e}")))?;
    let claims_b64 = URL_SAFE_NO_PAD.encode(&claims_json);

    let mut signing_input = String::with_capacity(header_b64.len() + 1 + claims_b64.len());
    signing_input.push_str(&header_b64);
    signing_input.push('.');
    signing_input.push_str(&claims_b64);

    let signature: Signature = signing_key
        .try_sign(signing_input.as_bytes())
        .map_err(|e| KeyToolError::signing(&format!("ECDSA signing failed: {e}")))?;
    let signature_b64 = URL_SAFE_NO_PAD.encode(signature.to_bytes());

    let mut token = String::with_capacity(signing_input.len() + 1 + signature_b64.len());
    token.push_str(&signing_input);
    token.push('.');
    token.push_str(&signature_b64);

    log::trace!("Signed compact JWS of {} bytes", token.len());
    Ok(AccessToken(token))
}
