//! Error types for report generation.

/// Result type for verifier operations
pub type VerifyResult<T> = Result<T, VerifyError>;

/// Error type for verifier operations.
///
/// A body failing its tolerance check is not an error; it is reported as a
/// `FAIL` row. These variants cover the faults around the report instead.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<toml::de::Error> for VerifyError {
    fn from(e: toml::de::Error) -> Self {
        VerifyError::Config(format!("Failed to parse config: {}", e))
    }
}
