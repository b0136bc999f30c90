//! Key tool error types

use thiserror::Error;

/// Key tool operation result type
pub type KeyToolResult<T> = Result<T, KeyToolError>;

/// Failures of the cryptographic and encoding operations
///
/// Structural validation of identifiers is not an error; see
/// [`crate::validation::Validity`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyToolError {
    /// The provider could not create or export a key pair
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),
    /// PEM framing or base64 body is malformed, or the body is empty
    #[error("Encoding error: {0}")]
    Encoding(String),
    /// Private key PEM is not a PKCS8 P-256 key usable with ES256
    #[error("Key import failed: {0}")]
    KeyImport(String),
    /// Serializing or signing the token failed
    #[error("Signing error: {0}")]
    Signing(String),
}

impl KeyToolError {
    /// Create a key generation error
    #[inline]
    #[must_use]
    pub fn key_generation(msg: &str) -> Self {
        KeyToolError::KeyGeneration(msg.to_string())
    }

    /// Create an encoding error
    #[inline]
    #[must_use]
    pub fn encoding(msg: &str) -> Self {
        KeyToolError::Encoding(msg.to_string())
    }

    /// Create a key import error
    #[inline]
    #[must_use]
    pub fn key_import(msg: &str) -> Self {
        KeyToolError::KeyImport(msg.to_string())
    }

    /// Create a signing error
    #[inline]
    #[must_use]
    pub fn signing(msg: &str) -> Self {
        KeyToolError::Signing(msg.to_string())
    }

    /// Stable tag for logs and machine-readable output
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            KeyToolError::KeyGeneration(_) => "key_generation",
            KeyToolError::Encoding(_) => "encoding",
            KeyToolError::KeyImport(_) => "key_import",
            KeyToolError::Signing(_) => "signing",
        }
    }
}
