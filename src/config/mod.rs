//! Configuration management for Vitalis.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vitalis::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("vitalis.toml")?;
//! println!("Data file: {}", config.storage.data_path);
//! println!("Listening on {}:{}", config.server.host, config.server.port);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8000
//!
//! [storage]
//! data_path = "data.json"
//! create_if_missing = true
//!
//! [logging]
//! local_enabled = false
//! ```
//!
//! # Environment Variables
//!
//! `${VAR_NAME}` placeholders in the TOML are substituted from the
//! environment, and `VITALIS_*` variables override individual keys
//! (e.g. `VITALIS_SERVER_PORT`, `VITALIS_STORAGE_DATA_PATH`).

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, LoggingConfig, ServerConfig, StorageConfig, VitalisConfig,
};
