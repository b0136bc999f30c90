//! Credential issuance for the Nabto WebRTC centralized authorization model
//!
//! This crate mocks the authorization service side of the model:
//! - ECDSA P-256 key pairs as PKCS8/SPKI PEM
//! - `product:<sha-256>` key ids derived from the public key
//! - ES256 access tokens for a `urn:nabto:webrtc:<product>:<device>` resource
//! - Structural validation of keys and identifiers before issuing
//!
//! Nothing is stored; every call computes its result and returns it.

pub mod api;
pub mod claims;
pub mod crypto;
mod error;
pub mod issuer;
pub mod pem;
mod types;
pub mod validation;

pub use api::{KeyPairBuilder, TokenBuilder};
pub use claims::{DEFAULT_TOKEN_TTL_HOURS, TokenClaims, default_token_ttl};
pub use crypto::{derive_key_id, generate_keypair};
pub use error::*;
pub use issuer::{issue_token, issue_token_at};
pub use types::*;
pub use validation::{
    Validity, is_valid_device_id, is_valid_pem_key, is_valid_product_id, validate_device_id,
    validate_pem_key, validate_product_id,
};

/// Main entry point for the builder API
pub struct KeyTool;

impl KeyTool {
    /// ES256 key pair generation
    #[must_use]
    pub fn keypair() -> KeyPairBuilder {
        KeyPairBuilder::new()
    }

    /// ES256 access token issuance
    #[must_use]
    pub fn token() -> TokenBuilder {
        TokenBuilder::new()
    }
}
