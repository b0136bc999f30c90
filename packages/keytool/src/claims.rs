//! Access token claims

use crate::{
    error::{KeyToolError, KeyToolResult},
    types::resource_urn,
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Token lifetime used when the caller does not choose one
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// Default token lifetime, one day
#[must_use]
pub fn default_token_ttl() -> Duration {
    Duration::hours(DEFAULT_TOKEN_TTL_HOURS)
}

/// Payload of an access token
///
/// Serialized as `{"scope":..,"resource":..,"iat":..,"exp":..}`, timestamps
/// in seconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Space separated permissions, e.g. `client:connect turn`
    pub scope: String,
    /// `urn:nabto:webrtc:<productId>:<deviceId>`
    pub resource: String,
    /// Issued at
    pub iat: i64,
    /// Expiration time
    pub exp: i64,
}

impl TokenClaims {
    /// Claims for a product/device pair issued at `issued_at`, valid for `ttl`
    ///
    /// # Errors
    /// Returns `KeyToolError::Signing` if the expiration falls outside the
    /// representable time range.
    pub fn new(
        scope: &str,
        product_id: &str,
        device_id: &str,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> KeyToolResult<Self> {
        let expires_at = issued_at
            .checked_add_signed(ttl)
            .ok_or_else(|| KeyToolError::signing("token expiration out of range"))?;

        Ok(Self {
            scope: scope.to_string(),
            resource: resource_urn(product_id, device_id),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        })
    }

    /// Seconds between issue and expiration
    #[must_use]
    pub fn lifetime_seconds(&self) -> i64 {
        self.exp - self.iat
    }
}
