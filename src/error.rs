//! Error types for the concord library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`ConcordError`] enum. The taxonomy mirrors how failures surface to the
//! user: invalid input is rejected before any work happens, annotation
//! failures abort the current request only, and export failures never affect
//! results already produced in memory.
//!
//! # Examples
//!
//! ```
//! use concord::error::{ConcordError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ConcordError::invalid_input("Search term must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for concord operations.
#[derive(Error, Debug)]
pub enum ConcordError {
    /// I/O errors (reading input files, writing reports, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid user input (empty search term, zero window size, missing text)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Annotation errors (tokenization or tagging failed for the current request)
    #[error("Annotation error: {0}")]
    Annotation(String),

    /// Export errors (report file could not be written)
    #[error("Export error: {0}")]
    Export(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with ConcordError.
pub type Result<T> = std::result::Result<T, ConcordError>;

impl ConcordError {
    /// Create a new invalid-input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        ConcordError::InvalidInput(msg.into())
    }

    /// Create a new annotation error.
    pub fn annotation<S: Into<String>>(msg: S) -> Self {
        ConcordError::Annotation(msg.into())
    }

    /// Create a new export error.
    pub fn export<S: Into<String>>(msg: S) -> Self {
        ConcordError::Export(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ConcordError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConcordError::invalid_input("window size must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid input: window size must be at least 1"
        );

        let err = ConcordError::export("disk full");
        assert_eq!(err.to_string(), "Export error: disk full");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing file");
        let err: ConcordError = io_err.into();
        assert!(matches!(err, ConcordError::Io(_)));
    }
}
