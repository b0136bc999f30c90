//! Command line front end for the `keytool` crate
//!
//! Remembers form fields between runs, validates them and prints key pairs,
//! key ids and access tokens, either as plain text or as JSON.

pub mod cli;
pub mod config;
pub mod error;
pub mod help;
pub mod store;

pub use cli::{Cli, CommandContext, Commands, run};
pub use config::KeyToolConfig;
pub use error::{CliError, CliResult};
pub use store::{Field, FieldStore, JsonFileFieldStore, MemoryFieldStore};
