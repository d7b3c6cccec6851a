//! Domain error types
//!
//! This module defines the error hierarchy for Vitalis. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Vitalis error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum VitalisError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Record validation errors (aggregated field violations)
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Requested record does not exist
    #[error("{0}")]
    NotFound(String),

    /// Record with the same id already exists
    #[error("{0}")]
    Conflict(String),

    /// Invalid caller-supplied argument (bad sort field or order)
    #[error("{0}")]
    InvalidArgument(String),

    /// Record store errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Record store errors
///
/// Errors that occur when loading or saving the persisted patient collection.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backing data file does not exist
    #[error("Data file not found: {0}")]
    Missing(String),

    /// Backing data file exists but cannot be read
    #[error("Failed to read data file {path}: {message}")]
    Unreadable { path: String, message: String },

    /// Backing data file is not a JSON object of attribute objects
    #[error("Invalid data file format: {0}")]
    InvalidFormat(String),

    /// Backing data file could not be written
    #[error("Failed to write data file {path}: {message}")]
    WriteFailed { path: String, message: String },
}

/// Aggregated field constraint violations
///
/// Collected during record construction. Validation checks every field
/// rather than failing on the first violation, so a single error carries
/// the complete list of problems with the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Human-readable violation messages, one per failed constraint
    pub violations: Vec<String>,
}

impl ValidationError {
    /// Creates a validation error from a list of violation messages
    pub fn new(violations: Vec<String>) -> Self {
        Self { violations }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.violations.join("; "))
    }
}

impl std::error::Error for ValidationError {}

// Conversion from std::io::Error
impl From<std::io::Error> for VitalisError {
    fn from(err: std::io::Error) -> Self {
        VitalisError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for VitalisError {
    fn from(err: serde_json::Error) -> Self {
        VitalisError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for VitalisError {
    fn from(err: toml::de::Error) -> Self {
        VitalisError::Configuration(format!("TOML parse error: {err}"))
    }
}
