//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

use adapter_csv::{load_rows_from_path, sample_rows};
use cannibal_core::TransactionRow;

use crate::{CliError, Result};

pub mod baseline;
pub mod channels;
pub mod simulate;

/// Resolve the transaction rows for a command: a CSV file or the bundled
/// sample dataset, never both.
pub(crate) fn load_input(input: Option<&str>, sample: bool) -> Result<Vec<TransactionRow>> {
    match (input, sample) {
        (Some(_), true) => Err(CliError::InvalidArgument(
            "--input and --sample are mutually exclusive".to_string(),
        )),
        (None, true) => Ok(sample_rows()),
        (Some(path), false) => {
            if !std::path::Path::new(path).exists() {
                return Err(CliError::FileNotFound(path.to_string()));
            }
            Ok(load_rows_from_path(path)?)
        }
        (None, false) => Err(CliError::InvalidArgument(
            "provide --input <file> or --sample".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_input_sample() {
        let rows = load_input(None, true).unwrap();
        assert_eq!(rows.len(), 6);
    }

    #[test]
    fn test_load_input_requires_a_source() {
        let err = load_input(None, false).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[test]
    fn test_load_input_rejects_both_sources() {
        let err = load_input(Some("rows.csv"), true).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[test]
    fn test_load_input_missing_file() {
        let err = load_input(Some("/nonexistent/rows.csv"), false).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }
}
