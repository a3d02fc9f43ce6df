//! Error types for the Graded library.
//!
//! The analysis and rewrite pipeline itself never fails: degenerate input
//! (empty text, text without sentence terminators) produces zero-valued
//! metrics or pass-through output. Errors only arise at the edges, when
//! vocabulary or configuration files are loaded, when a configured aside
//! pattern is compiled, or when the command-line front end reads and writes
//! text.
//!
//! # Examples
//!
//! ```
//! use graded::error::{GradedError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(GradedError::invalid_argument("unknown level 'c3'"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Graded operations.
#[derive(Error, Debug)]
pub enum GradedError {
    /// I/O errors (reading articles, vocabulary files, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Vocabulary loading errors
    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    /// Invalid user-supplied argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Foreign errors, such as an aside pattern that fails to compile
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with GradedError.
pub type Result<T> = std::result::Result<T, GradedError>;

impl GradedError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        GradedError::Config(msg.into())
    }

    /// Create a new vocabulary error.
    pub fn vocabulary<S: Into<String>>(msg: S) -> Self {
        GradedError::Vocabulary(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        GradedError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = GradedError::config("missing level");
        assert_eq!(error.to_string(), "Configuration error: missing level");

        let error = GradedError::vocabulary("bad entry");
        assert_eq!(error.to_string(), "Vocabulary error: bad entry");

        let error = GradedError::invalid_argument("level 'b7'");
        assert_eq!(error.to_string(), "Invalid argument: level 'b7'");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let graded_error = GradedError::from(io_error);

        match graded_error {
            GradedError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
