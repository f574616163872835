//! Analysis error types

use thiserror::Error;

/// Errors that can occur while deriving views from the dataset
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Requested year has no records in the dataset
    #[error("Invalid year: {0} is not present in the dataset")]
    InvalidYear(i32),
}

/// Result type alias for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            AnalysisError::InvalidYear(2009).to_string(),
            "Invalid year: 2009 is not present in the dataset"
        );
    }
}
