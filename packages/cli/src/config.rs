use crate::error::{CliError, CliResult};
use keytool::DEFAULT_TOKEN_TTL_HOURS;
use keytool_common::LoggingTransformer;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Longest token lifetime accepted from flags, the store or the config, ten years
pub const MAX_EXPIRATION_HOURS: u32 = 87_600;

/// Name of the per-user configuration directory
pub const APP_DIR: &str = "keytool";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyToolConfig {
    /// Where remembered form fields are kept
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    /// Scope used when neither flag nor store provide one
    #[serde(default = "default_scope")]
    pub default_scope: String,
    /// Token lifetime used when neither flag nor store provide one
    #[serde(default = "default_expiration_hours")]
    pub default_expiration_hours: u32,
}

fn default_scope() -> String {
    "client:connect turn".to_string()
}

fn default_expiration_hours() -> u32 {
    DEFAULT_TOKEN_TTL_HOURS as u32
}

fn default_store_path() -> PathBuf {
    config_dir().join("fields.json")
}

/// OS config directory for the tool, `./keytool` if there is none
pub fn config_dir() -> PathBuf {
    match dirs::config_dir() {
        Some(mut dir) => {
            dir.push(APP_DIR);
            dir
        }
        None => {
            LoggingTransformer::log_config_fallback(
                "config_dir",
                "could not determine OS config directory, using ./keytool",
            );
            PathBuf::from(".").join(APP_DIR)
        }
    }
}

/// Default location of the config file
pub fn default_config_path() -> PathBuf {
    config_dir().join("config.json")
}

impl Default for KeyToolConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            default_scope: default_scope(),
            default_expiration_hours: default_expiration_hours(),
        }
    }
}

impl KeyToolConfig {
    /// Load the config file
    ///
    /// An explicitly given path must exist. The default path may be absent,
    /// in which case defaults apply.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = default_config_path();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> CliResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CliError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|e| {
            CliError::Configuration(format!("cannot parse {}: {e}", path.display()))
        })?;
        if !(1..=MAX_EXPIRATION_HOURS).contains(&config.default_expiration_hours) {
            return Err(CliError::Configuration(format!(
                "default_expiration_hours must be between 1 and {MAX_EXPIRATION_HOURS}"
            )));
        }
        Ok(config)
    }
}
