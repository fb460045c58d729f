//! Dataset load error types
//!
//! Defines all errors that can occur while loading the case table.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the case table
///
/// Every variant is fatal at startup: the dashboard must not serve
/// selections over a dataset it could not fully load. An empty filter
/// result is never an error and has no variant here.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Source file could not be opened or read
    #[error("Failed to read source {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File- or row-level CSV failure (bad quoting, uneven row lengths)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the header row
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    /// A date cell does not parse as YYYY-MM-DD
    #[error("Row {row}: invalid date {value:?}")]
    InvalidDate { row: usize, value: String },

    /// A count cell is not a non-negative whole number
    #[error("Row {row}: invalid {column} value {value:?}")]
    InvalidCount {
        row: usize,
        column: String,
        value: String,
    },
}

/// Result type alias for load operations
pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::MissingColumn {
            column: "total_cases".to_string(),
        };
        assert_eq!(err.to_string(), "Missing required column: total_cases");

        let err = LoadError::InvalidDate {
            row: 3,
            value: "2020-13-01".to_string(),
        };
        assert_eq!(err.to_string(), "Row 3: invalid date \"2020-13-01\"");

        let err = LoadError::InvalidCount {
            row: 7,
            column: "new_cases".to_string(),
            value: "-4".to_string(),
        };
        assert_eq!(err.to_string(), "Row 7: invalid new_cases value \"-4\"");
    }
}
