//! Error types for the warehouse-mapper application.
//!
//! Only structural problems with the input (too few columns) and
//! infrastructure failures are errors. Bad cells are absorbed by the
//! normalizer and the color assigner and never surface here.

use thiserror::Error;

/// The main error type for warehouse-mapper operations.
#[derive(Error, Debug)]
pub enum MapperError {
    /// The table does not have enough columns for latitude and longitude
    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    /// CSV reader/writer errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Data not found errors
    #[error("Data not found: {message}")]
    DataNotFound { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

impl MapperError {
    /// The error raised when neither parse attempt yields two columns
    pub fn insufficient_columns(found: usize) -> Self {
        MapperError::MalformedInput {
            message: format!(
                "CSV must have at least two columns for latitude and longitude (found {})",
                found
            ),
        }
    }
}

/// Convenience type alias for Results with MapperError
pub type Result<T> = std::result::Result<T, MapperError>;
