use keytool::KeyToolError;

/// Command line result type
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    KeyTool(#[from] KeyToolError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// One message per invalid field
    #[error("Invalid input: {}", .0.join("; "))]
    Validation(Vec<String>),
    /// Invalid fields together with the status of every checked field
    #[error("Invalid input: {}", .messages.join("; "))]
    FieldReport {
        messages: Vec<String>,
        fields: serde_json::Map<String, serde_json::Value>,
    },
}

impl CliError {
    /// Stable tag for `--json` output
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::KeyTool(e) => e.kind(),
            CliError::Io(_) => "io",
            CliError::Serialization(_) => "serialization",
            CliError::Configuration(_) => "configuration",
            CliError::Validation(_) | CliError::FieldReport { .. } => "validation",
        }
    }
}
