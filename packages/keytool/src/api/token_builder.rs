//! ES256 access token builder
//!
//! States: keys, then product/device, then scope; lifetime, issue time and
//! result handler are optional on the final state.

use crate::{
    claims::default_token_ttl,
    error::KeyToolResult,
    issuer,
    types::AccessToken,
};
use chrono::{DateTime, Duration, Utc};
use keytool_common::LoggingTransformer;

type TokenHandler = Box<dyn Fn(KeyToolResult<AccessToken>) -> AccessToken + Send + Sync>;

/// Token builder - initial state
#[derive(Debug, Default)]
pub struct TokenBuilder;

impl TokenBuilder {
    /// Create a new token builder
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Set the key pair, both halves as PEM
    #[must_use]
    pub fn with_keys(self, public_key_pem: &str, private_key_pem: &str) -> TokenWithKeys {
        TokenWithKeys {
            public_key_pem: public_key_pem.to_string(),
            private_key_pem: private_key_pem.to_string(),
        }
    }
}

/// Token builder with key pair configured
pub struct TokenWithKeys {
    public_key_pem: String,
    private_key_pem: String,
}

impl TokenWithKeys {
    /// Set the product and device the token grants access to
    #[must_use]
    pub fn for_device(self, product_id: &str, device_id: &str) -> TokenWithResource {
        TokenWithResource {
            keys: self,
            product_id: product_id.to_string(),
            device_id: device_id.to_string(),
        }
    }
}

/// Token builder with key pair and resource configured
pub struct TokenWithResource {
    keys: TokenWithKeys,
    product_id: String,
    device_id: String,
}

impl TokenWithResource {
    /// Set the scope claim, e.g. `client:connect turn`
    #[must_use]
    pub fn with_scope(self, scope: &str) -> TokenReady {
        TokenReady {
            request: self,
            scope: scope.to_string(),
            ttl: default_token_ttl(),
            issued_at: None,
            result_handler: None,
        }
    }
}

/// Token builder ready to issue
pub struct TokenReady {
    request: TokenWithResource,
    scope: String,
    ttl: Duration,
    issued_at: Option<DateTime<Utc>>,
    result_handler: Option<TokenHandler>,
}

impl TokenReady {
    /// Token lifetime, one day unless set
    #[must_use]
    pub fn expires_in(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Token lifetime in whole hours
    #[must_use]
    pub fn expires_in_hours(self, hours: u32) -> Self {
        self.expires_in(Duration::hours(i64::from(hours)))
    }

    /// Fix the issued-at time instead of using the current time
    #[must_use]
    pub fn issued_at(mut self, issued_at: DateTime<Utc>) -> Self {
        self.issued_at = Some(issued_at);
        self
    }

    /// Add result handler; `on_result` comes before the action
    #[must_use]
    pub fn on_result<F>(mut self, handler: F) -> Self
    where
        F: Fn(KeyToolResult<AccessToken>) -> AccessToken + Send + Sync + 'static,
    {
        self.result_handler = Some(Box::new(handler));
        self
    }

    /// Sign the token
    ///
    /// # Errors
    /// Returns the issuer's `KeyToolError` when no result handler is set and
    /// issuing fails. With a handler, its output is returned instead.
    pub async fn issue(self) -> KeyToolResult<AccessToken> {
        let request = &self.request;
        let result = issuer::issue_token_at(
            &request.keys.public_key_pem,
            &request.keys.private_key_pem,
            &request.product_id,
            &request.device_id,
            &self.scope,
            self.ttl,
            self.issued_at.unwrap_or_else(Utc::now),
        );

        if let Some(handler) = self.result_handler {
            Ok(handler(result))
        } else {
            match result {
                Ok(token) => Ok(token),
                Err(e) => {
                    LoggingTransformer::log_crypto_failure(
                        "token_signing",
                        e.kind(),
                        &e.to_string(),
                    );
                    Err(e)
                }
            }
        }
    }
}
