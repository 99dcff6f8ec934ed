//! Error module containing error types and result aliases

mod data_error;

pub use data_error::DataError;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;
