//! Data error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, shaping or writing the star schema tables.
#[derive(Debug, Clone, Error)]
pub enum DataError {
    /// The input file does not exist
    #[error("The file '{}' was not found. Please check your file path.", .0.display())]
    FileNotFound(PathBuf),

    /// Reading or writing a file failed
    #[error("I/O error on '{}': {message}", .path.display())]
    Io { path: PathBuf, message: String },

    /// Malformed delimited text
    #[error("CSV error: {0}")]
    Csv(String),

    /// A record did not carry the expected number of positional fields
    #[error("Line {line}: expected {expected} fields, found {actual}")]
    FieldCount {
        line: u64,
        expected: usize,
        actual: usize,
    },
}

impl DataError {
    /// Build an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
