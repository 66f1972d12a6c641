//! CLI error types.

use adapter_csv::LoadError;
use thiserror::Error;

/// Convenience result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Referenced input or scenario file does not exist
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// Unsupported flag value (e.g. unknown output format)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transaction CSV could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Scenario TOML could not be parsed
    #[error("scenario config error: {0}")]
    Scenario(#[from] toml::de::Error),

    /// JSON output serialization failed
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV output serialization failed
    #[error("CSV output error: {0}")]
    CsvOutput(#[from] csv::Error),
}
