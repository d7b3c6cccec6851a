//! Logging and observability
//!
//! This module provides structured logging with configurable log levels,
//! console output for development, and optional JSON file logging with
//! rotation.

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};
