//! Persisted form fields
//!
//! The CLI remembers the last used product id, device id, expiration and key
//! pair between invocations. The key tool library never sees this store.

use crate::error::CliResult;
use keytool_common::LoggingTransformer;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Fields remembered between invocations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    ProductId,
    DeviceId,
    ExpirationHours,
    PublicKey,
    PrivateKey,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::ProductId,
        Field::DeviceId,
        Field::ExpirationHours,
        Field::PublicKey,
        Field::PrivateKey,
    ];

    /// Store key of the field
    pub fn key(self) -> &'static str {
        match self {
            Field::ProductId => "productId",
            Field::DeviceId => "deviceId",
            Field::ExpirationHours => "expirationHours",
            Field::PublicKey => "publicKey",
            Field::PrivateKey => "privateKey",
        }
    }

    /// Whether the value is key material and must not be echoed
    pub fn is_secret(self) -> bool {
        matches!(self, Field::PrivateKey)
    }
}

/// String key-value store for remembered fields
pub trait FieldStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> CliResult<()>;

    /// Remove every remembered field
    fn clear(&mut self) -> CliResult<()>;

    fn get_field(&self, field: Field) -> Option<String> {
        self.get(field.key())
    }

    fn set_field(&mut self, field: Field, value: &str) -> CliResult<()> {
        self.set(field.key(), value)
    }
}

/// In-memory store, used when nothing should touch the disk
#[derive(Debug, Default, Clone)]
pub struct MemoryFieldStore {
    values: BTreeMap<String, String>,
}

impl MemoryFieldStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FieldStore for MemoryFieldStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> CliResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> CliResult<()> {
        self.values.clear();
        Ok(())
    }
}

/// JSON file backed store; every `set` rewrites the file
#[derive(Debug)]
pub struct JsonFileFieldStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileFieldStore {
    /// Open the store at `path`; a missing file is an empty store
    pub fn open(path: impl Into<PathBuf>) -> CliResult<Self> {
        let path = path.into();
        let values = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            if contents.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&contents)?
            }
        } else {
            BTreeMap::new()
        };
        log::debug!(
            "Opened field store {} with {} entries",
            path.display(),
            values.len()
        );
        Ok(Self { path, values })
    }

    fn persist(&self) -> CliResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(&self.values)?;
        write_secret_file(&self.path, &contents)
    }
}

impl FieldStore for JsonFileFieldStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> CliResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        let result = self.persist();
        LoggingTransformer::log_field_store("set", key, result.is_ok());
        result
    }

    fn clear(&mut self) -> CliResult<()> {
        self.values.clear();
        let result = self.persist();
        LoggingTransformer::log_field_store("clear", "*", result.is_ok());
        result
    }
}

/// Write a file readable only by the owner where the platform allows it
pub(crate) fn write_secret_file(path: &Path, contents: &str) -> CliResult<()> {
    std::fs::write(path, contents)?;
    restrict_permissions(path)
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> CliResult<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> CliResult<()> {
    Ok(())
}
