//! CLI command definitions

use crate::help::CENTRALIZED_MODEL_HELP;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "keytool")]
#[command(about = "Generate ES256 key pairs and access tokens for Nabto WebRTC")]
#[command(long_about = CENTRALIZED_MODEL_HELP)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the config file (default: $XDG_CONFIG_HOME/keytool/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the remembered fields file (overrides the config file)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Do not read or write remembered fields
    #[arg(long, global = true)]
    pub no_store: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Generate a new ES256 (ECDSA P-256) key pair
    ///
    /// The public key is what Nabto WebRTC is configured with; the private key
    /// signs tokens. Both halves are remembered for the `token` command.
    ///
    /// Example usage:
    ///   keytool generate-keys
    ///   keytool generate-keys --out-dir ./keys
    GenerateKeys {
        /// Write public_key.pem and private_key.pem into this directory
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Sign an access token for a product/device pair
    ///
    /// Every value falls back to the remembered field, then to the config
    /// defaults. Nothing is signed unless every field validates.
    ///
    /// Example usage:
    ///   keytool token --product-id wp-abcdefgh --device-id wd-ijklmnop
    ///   keytool token --scope "client:connect turn" --expiration-hours 2
    Token {
        #[command(flatten)]
        fields: TokenFields,

        /// Value of the scope claim
        #[arg(long)]
        scope: Option<String>,
    },

    /// Print the key id (`product:<sha-256>`) of a public key
    Kid {
        /// Public key PEM file (default: remembered public key)
        #[arg(long)]
        public_key: Option<PathBuf>,
    },

    /// Check the given or remembered fields without signing anything
    Validate {
        #[command(flatten)]
        fields: TokenFields,
    },

    /// Inspect or clear remembered fields
    Fields {
        #[command(subcommand)]
        action: FieldsAction,
    },

    /// Explain the centralized authorization model this tool mocks
    About,
}

/// Inputs shared by `token` and `validate`
#[derive(Clone, Debug, Default, Args)]
pub struct TokenFields {
    /// Product id, starts with `wp-`
    #[arg(long)]
    pub product_id: Option<String>,

    /// Device id, starts with `wd-`
    #[arg(long)]
    pub device_id: Option<String>,

    /// Token lifetime in hours
    #[arg(long)]
    pub expiration_hours: Option<String>,

    /// Public key PEM file
    #[arg(long)]
    pub public_key: Option<PathBuf>,

    /// Private key PEM file
    #[arg(long)]
    pub private_key: Option<PathBuf>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum FieldsAction {
    /// Show remembered fields (private key redacted)
    Show,
    /// Forget all remembered fields
    Clear,
}
