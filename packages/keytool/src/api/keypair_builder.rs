//! Key pair generation builder

use crate::{crypto, error::KeyToolResult, types::KeyPair};
use keytool_common::LoggingTransformer;

type KeyPairHandler = Box<dyn Fn(KeyToolResult<KeyPair>) -> KeyPair + Send + Sync>;

/// ES256 key pair builder
#[derive(Default)]
pub struct KeyPairBuilder {
    result_handler: Option<KeyPairHandler>,
}

impl KeyPairBuilder {
    /// Create a new key pair builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add result handler; `on_result` comes before the action
    #[must_use]
    pub fn on_result<F>(mut self, handler: F) -> Self
    where
        F: Fn(KeyToolResult<KeyPair>) -> KeyPair + Send + Sync + 'static,
    {
        self.result_handler = Some(Box::new(handler));
        self
    }

    /// Generate the key pair
    ///
    /// # Errors
    /// Returns `KeyToolError::KeyGeneration` when no result handler is set and
    /// generation fails. With a handler, its output is returned instead.
    pub async fn generate(self) -> KeyToolResult<KeyPair> {
        let result = crypto::generate_keypair();

        if let Some(handler) = self.result_handler {
            Ok(handler(result))
        } else {
            match result {
                Ok(keypair) => Ok(keypair),
                Err(e) => {
                    LoggingTransformer::log_crypto_failure(
                        "key_generation",
                        e.kind(),
                        &e.to_string(),
                    );
                    Err(e)
                }
            }
        }
    }
}
