use thiserror::Error;

/// Main error type for Degrees
#[derive(Error, Debug)]
pub enum DegreesError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader errors (unreadable file, bad header)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Dataset directory or one of its tables is missing
    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    /// Name or chosen candidate id does not match a known person
    #[error("Person not found: {0}")]
    PersonNotFound(String),

    /// Search stopped after expanding the configured number of nodes
    #[error("Search budget exceeded after expanding {0} nodes")]
    SearchBudgetExceeded(usize),
}

/// Convenient Result type using DegreesError
pub type Result<T> = std::result::Result<T, DegreesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DegreesError::PersonNotFound("Kevin Bacon".to_string());
        assert!(err.to_string().contains("Person not found"));
        assert!(err.to_string().contains("Kevin Bacon"));
    }

    #[test]
    fn test_budget_error_display() {
        let err = DegreesError::SearchBudgetExceeded(42);
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let degrees_err: DegreesError = io_err.into();
        assert!(matches!(degrees_err, DegreesError::Io(_)));
    }

    #[test]
    fn test_error_from_csv() {
        let csv_err: csv::Error = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
        let degrees_err: DegreesError = csv_err.into();
        assert!(matches!(degrees_err, DegreesError::Csv(_)));
    }
}
