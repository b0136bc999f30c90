//! Access token issuance
//!
//! Identifier shape is not checked here; callers gate product and device ids
//! through [`crate::validation`] first.

use crate::{
    claims::TokenClaims,
    crypto::{derive_key_id, es256_sign, import_signing_key},
    error::KeyToolResult,
    types::{AccessToken, JwsHeader},
};
use chrono::{DateTime, Duration, Utc};
use keytool_common::LoggingTransformer;

/// Issue an ES256 access token valid for `ttl` from now
///
/// # Errors
/// - `KeyToolError::KeyImport` if the private key cannot be imported; no
///   signing is attempted in that case
/// - `KeyToolError::Encoding` if the public key PEM cannot be decoded
/// - `KeyToolError::Signing` if serialization or signing fails
pub fn issue_token(
    public_key_pem: &str,
    private_key_pem: &str,
    product_id: &str,
    device_id: &str,
    scope: &str,
    ttl: Duration,
) -> KeyToolResult<AccessToken> {
    issue_token_at(
        public_key_pem,
        private_key_pem,
        product_id,
        device_id,
        scope,
        ttl,
        Utc::now(),
    )
}

/// Issue an ES256 access token with an explicit issued-at time
///
/// # Errors
/// Same as [`issue_token`].
pub fn issue_token_at(
    public_key_pem: &str,
    private_key_pem: &str,
    product_id: &str,
    device_id: &str,
    scope: &str,
    ttl: Duration,
    issued_at: DateTime<Utc>,
) -> KeyToolResult<AccessToken> {
    let signing_key = import_signing_key(private_key_pem)?;
    let kid = derive_key_id(public_key_pem)?;

    let claims = TokenClaims::new(scope, product_id, device_id, issued_at, ttl)?;
    let header = JwsHeader::es256(kid);
    let token = es256_sign(&signing_key, &header, &claims)?;

    LoggingTransformer::log_token_issued(
        header.kid.as_str(),
        &claims.resource,
        claims.lifetime_seconds(),
    );
    Ok(token)
}
