//! Structural validation of key material and identifiers
//!
//! These checks gate input before it reaches the token issuer. A failed check
//! is a normal outcome, reported as [`Validity::Invalid`] with a reason that
//! can be shown next to the offending field.

use crate::{pem, types::KeyKind};
use serde::{Deserialize, Serialize};

/// Required prefix of product ids
pub const PRODUCT_ID_PREFIX: &str = "wp-";

/// Required prefix of device ids
pub const DEVICE_ID_PREFIX: &str = "wd-";

/// Outcome of a structural check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum Validity {
    /// The value passed
    Valid,
    /// The value failed, with a human readable reason
    Invalid(String),
}

impl Validity {
    /// True for [`Validity::Valid`]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// Reason of an invalid result
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Validity::Valid => None,
            Validity::Invalid(reason) => Some(reason),
        }
    }
}

/// Check PEM framing and base64 body of a key of the given kind
///
/// Only the envelope is checked. The DER inside is not parsed.
#[must_use]
pub fn validate_pem_key(kind: KeyKind, pem: &str) -> Validity {
    let invalid = || {
        Validity::Invalid(format!(
            "Must be a {kind} key in PEM format ({} ... {})",
            kind.header(),
            kind.footer()
        ))
    };

    match pem::armored_body(pem, kind) {
        Ok(body) => match pem::decode_body(&body) {
            Ok(_) => Validity::Valid,
            Err(_) => invalid(),
        },
        Err(_) => invalid(),
    }
}

/// Boolean form of [`validate_pem_key`]
#[must_use]
pub fn is_valid_pem_key(kind: KeyKind, pem: &str) -> bool {
    validate_pem_key(kind, pem).is_valid()
}

/// Product ids start with `wp-` and are lowercase
#[must_use]
pub fn validate_product_id(product_id: &str) -> Validity {
    validate_prefixed_id(product_id, PRODUCT_ID_PREFIX, "Product ID")
}

/// Boolean form of [`validate_product_id`]
#[must_use]
pub fn is_valid_product_id(product_id: &str) -> bool {
    validate_product_id(product_id).is_valid()
}

/// Device ids start with `wd-` and are lowercase
#[must_use]
pub fn validate_device_id(device_id: &str) -> Validity {
    validate_prefixed_id(device_id, DEVICE_ID_PREFIX, "Device ID")
}

/// Boolean form of [`validate_device_id`]
#[must_use]
pub fn is_valid_device_id(device_id: &str) -> bool {
    validate_device_id(device_id).is_valid()
}

fn validate_prefixed_id(id: &str, prefix: &str, field: &str) -> Validity {
    let trimmed = id.trim();
    if !trimmed.starts_with(prefix) || trimmed.to_lowercase() != trimmed {
        return Validity::Invalid(format!(
            "{field} must start with '{prefix}' and be lowercase"
        ));
    }
    Validity::Valid
}
