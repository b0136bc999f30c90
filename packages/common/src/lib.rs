//! Common infrastructure shared by the key tool crates
//!
//! Currently this is the logging facade: `env_logger` initialization and
//! helpers that keep key material and identifiers out of log lines.

pub mod error;

pub use error::LoggingTransformer;
