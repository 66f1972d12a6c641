//! Ingestion error types.

use thiserror::Error;

/// Errors produced while loading transaction rows from CSV input.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying I/O failure while reading the input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or record deserialization failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("missing required column '{0}' in CSV header")]
    MissingColumn(&'static str),
}
