//! Error reporting support
//!
//! Error types themselves live with the crate that raises them; this module
//! only holds the logging side.

pub mod logging;

pub use logging::LoggingTransformer;
