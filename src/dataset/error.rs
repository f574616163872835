//! Dataset error types
//!
//! Errors raised while loading and validating the population table.

use thiserror::Error;

/// Errors that can occur while building a [`PopulationDataset`](super::PopulationDataset)
#[derive(Error, Debug)]
pub enum DatasetError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV or a field that could not be parsed
    #[error("CSV error on line {line}: {message}")]
    Csv { line: u64, message: String },

    /// More than one record for the same (region, year) pair
    #[error("Duplicate record for {region} in {year}")]
    DuplicateRecord { region: String, year: i32 },

    /// The source contained no records
    #[error("Dataset contains no records")]
    Empty,
}

impl From<csv::Error> for DatasetError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        let message = err.to_string();

        match err.into_kind() {
            csv::ErrorKind::Io(e) => DatasetError::Io(e),
            _ => DatasetError::Csv { line, message },
        }
    }
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DatasetError::DuplicateRecord {
            region: "Alabama".to_string(),
            year: 2015,
        };
        assert_eq!(err.to_string(), "Duplicate record for Alabama in 2015");

        assert_eq!(DatasetError::Empty.to_string(), "Dataset contains no records");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DatasetError = io_err.into();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
