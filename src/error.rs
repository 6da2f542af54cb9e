//! Error types for the kelime library.
//!
//! The rule operations themselves are total and never fail. Errors only come
//! from the surroundings: building a tokenizer from a user-supplied pattern,
//! reading input, or serializing CLI output. All of them are represented by
//! the [`KelimeError`] enum.
//!
//! # Examples
//!
//! ```
//! use kelime::error::{KelimeError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(KelimeError::invalid_argument("empty input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for kelime operations.
#[derive(Error, Debug)]
pub enum KelimeError {
    /// I/O errors (reading stdin, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenizer patterns, filters)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid argument passed to a command or constructor
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with KelimeError.
pub type Result<T> = std::result::Result<T, KelimeError>;

impl KelimeError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        KelimeError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        KelimeError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        KelimeError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = KelimeError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = KelimeError::invalid_argument("no input");
        assert_eq!(error.to_string(), "Invalid argument: no input");

        let error = KelimeError::other("boom");
        assert_eq!(error.to_string(), "Error: boom");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed");
        let kelime_error = KelimeError::from(io_error);

        match kelime_error {
            KelimeError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let error = KelimeError::from(anyhow::anyhow!("wrapped"));
        assert_eq!(error.to_string(), "Anyhow error: wrapped");
    }
}
