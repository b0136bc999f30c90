//! Structured logging infrastructure
//!
//! Provides env_logger-based logging with secure handling of key material
//! and identifiers, on top of the standard log crate.

use log::{debug, error, info, warn};
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging facade used by the key tool crates
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure logging levels via `RUST_LOG`:
    /// - `RUST_LOG=debug` - Enable all debug logs
    /// - `RUST_LOG=info` - Key generation and token issuance events
    /// - `RUST_LOG=keytool=debug,keytool_cli=info` - Module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            debug!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test; repeated initialization is ignored.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a freshly generated key pair by the hash of its key id
    pub fn log_key_generation(kid: &str) {
        let kid_hash = Self::secure_hash_key(kid);
        info!("Key pair generated: ES256 (kid_hash: {kid_hash})");
    }

    /// Log an issued token without exposing the token itself
    pub fn log_token_issued(kid: &str, resource: &str, ttl_seconds: i64) {
        let kid_hash = Self::secure_hash_key(kid);
        info!("Token issued for {resource} (kid_hash: {kid_hash}, ttl: {ttl_seconds}s)");
    }

    /// Log a failed cryptographic operation
    ///
    /// Only the operation and the error kind are logged; messages from the
    /// underlying parsers can echo input and go to debug level.
    pub fn log_crypto_failure(operation: &str, kind: &str, detail: &str) {
        error!("Cryptographic operation failed: {operation} (error_kind: {kind})");
        debug!("{operation} failure detail: {detail}");
    }

    /// Log a field that did not pass structural validation
    pub fn log_validation_failure(field: &str, reason: &str) {
        warn!("Validation failed for {field}: {reason}");
    }

    /// Log access to the persisted field store
    ///
    /// Field names are hashed since the store key names are user supplied
    /// when the store is used outside the CLI.
    pub fn log_field_store(operation: &str, key: &str, success: bool) {
        let key_hash = Self::secure_hash_key(key);
        if success {
            debug!("Field store {operation} succeeded (key_hash: {key_hash})");
        } else {
            warn!("Field store {operation} failed (key_hash: {key_hash})");
        }
    }

    /// Log a configuration value that fell back to its default
    pub fn log_config_fallback(setting: &str, reason: &str) {
        warn!("Configuration fallback for {setting}: {reason}");
    }

    /// SHA-256 based hashing of sensitive values for logging
    ///
    /// Returns the first 12 hex characters, prefixed with `#`.
    fn secure_hash_key(key: &str) -> String {
        let hash = Sha256::digest(key.as_bytes());
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }
}
