//! Key tool type definitions

use serde::{Deserialize, Serialize};

/// Prefix of every derived key id
pub const KEY_ID_PREFIX: &str = "product:";

/// Prefix of the resource URN carried in token claims
pub const RESOURCE_URN_PREFIX: &str = "urn:nabto:webrtc:";

/// JOSE algorithm name used for every token
pub const ES256: &str = "ES256";

/// Which half of a key pair a PEM document holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyKind {
    /// SPKI encoded public key
    Public,
    /// PKCS8 encoded private key
    Private,
}

impl KeyKind {
    /// Label used inside the PEM markers
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            KeyKind::Public => "PUBLIC KEY",
            KeyKind::Private => "PRIVATE KEY",
        }
    }

    /// `-----BEGIN <label>-----`
    #[must_use]
    pub fn header(self) -> String {
        format!("-----BEGIN {}-----", self.label())
    }

    /// `-----END <label>-----`
    #[must_use]
    pub fn footer(self) -> String {
        format!("-----END {}-----", self.label())
    }
}

impl std::fmt::Display for KeyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyKind::Public => write!(f, "public"),
            KeyKind::Private => write!(f, "private"),
        }
    }
}

/// ES256 key pair, both halves PEM encoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    /// SPKI public key, `PUBLIC KEY` markers
    pub public_key_pem: String,
    /// PKCS8 private key, `PRIVATE KEY` markers
    pub private_key_pem: String,
}

/// Key identifier of a public key: `product:<hex sha-256 of the SPKI DER>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyId(String);

impl KeyId {
    pub(crate) fn from_digest(digest: &[u8]) -> Self {
        Self(format!("{KEY_ID_PREFIX}{}", hex::encode(digest)))
    }

    /// Key id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex digest without the `product:` prefix
    #[must_use]
    pub fn digest_hex(&self) -> &str {
        self.0.strip_prefix(KEY_ID_PREFIX).unwrap_or(&self.0)
    }
}

impl AsRef<str> for KeyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for KeyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Protected header of an issued token
///
/// Field order is the serialization order: `{"alg":"ES256","kid":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwsHeader {
    /// Always `ES256`
    pub alg: String,
    /// Key id of the signing key pair
    pub kid: KeyId,
}

impl JwsHeader {
    /// ES256 header for the given key id
    #[must_use]
    pub fn es256(kid: KeyId) -> Self {
        Self {
            alg: ES256.to_string(),
            kid,
        }
    }
}

/// Build the resource URN for a product/device pair
///
/// Identifiers are inserted verbatim; callers validate them first.
#[must_use]
pub fn resource_urn(product_id: &str, device_id: &str) -> String {
    format!("{RESOURCE_URN_PREFIX}{product_id}:{device_id}")
}

/// Compact token string wrapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(pub String);

impl AccessToken {
    /// The three dot separated segments
    #[must_use]
    pub fn segments(&self) -> Vec<&str> {
        self.0.split('.').collect()
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<AccessToken> for String {
    fn from(token: AccessToken) -> Self {
        token.0
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
