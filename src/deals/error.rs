//! Deal table error types
//!
//! Every variant here is a load-time failure. Once a table is loaded,
//! queries against it cannot fail.

use thiserror::Error;

/// Errors that can occur while loading the deal table
#[derive(Error, Debug)]
pub enum DealError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid CSV
    #[error("CSV error: {0}")]
    Csv(String),

    /// A required column is absent from the header row
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// A cell could not be parsed as a number
    #[error("Invalid value {value:?} in column {column} at line {line}")]
    InvalidValue {
        line: u64,
        column: String,
        value: String,
    },
}

impl From<csv::Error> for DealError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(io) => DealError::Io(io),
                other => DealError::Csv(format!("{:?}", other)),
            }
        } else {
            DealError::Csv(err.to_string())
        }
    }
}

/// Result type alias for deal table operations
pub type DealResult<T> = Result<T, DealError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DealError::MissingColumn("__priority".to_string());
        assert_eq!(err.to_string(), "Missing column: __priority");

        let err = DealError::InvalidValue {
            line: 3,
            column: "__churn_prob".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value \"abc\" in column __churn_prob at line 3"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let deal_err: DealError = io_err.into();
        assert!(matches!(deal_err, DealError::Io(_)));
    }
}
