//! Error types for trip-tracker

use chrono::NaiveDate;
use thiserror::Error;

/// Input errors the caller can correct and retry.
///
/// A failed validation aborts the append before anything is written.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Employee name must not be empty")]
    EmptyEmployee,

    #[error("Travel start {start} is after travel end {end}")]
    InvertedDateRange { start: NaiveDate, end: NaiveDate },
}

/// Storage-layer errors, fatal to the current operation (no retry)
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read ledger file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid date in row {row}: {value}")]
    InvalidDate { row: usize, value: String },

    #[error("Malformed record in row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Access restricted: '{0}' is not an authorized email")]
    AccessDenied(String),
}

pub type Result<T> = std::result::Result<T, Error>;
