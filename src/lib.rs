// Vitalis - Patient Records HTTP Service
// Copyright (c) 2026 Vitalis Contributors
// Licensed under the MIT License

//! # Vitalis - Patient Records HTTP Service
//!
//! Vitalis is a small HTTP service that stores patient health records in a
//! single JSON file and exposes read, lookup, sort, and create operations
//! over them, deriving a BMI classification from each record.
//!
//! ## Architecture
//!
//! Vitalis follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (query and ingestion services)
//! - [`storage`] - Record store backends (JSON file, in-memory)
//! - [`http`] - axum router, handlers, and error envelopes
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vitalis::core::{IngestionService, QueryService};
//! use vitalis::domain::PatientDraft;
//! use vitalis::storage::JsonFileStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(JsonFileStore::new("data.json"));
//!     let ingestion = IngestionService::new(store.clone());
//!     let query = QueryService::new(store);
//!
//!     let draft = PatientDraft {
//!         id: Some("P001".to_string()),
//!         name: Some("Asha Rao".to_string()),
//!         city: Some("Pune".to_string()),
//!         age: Some(30),
//!         gender: Some("Female".to_string()),
//!         height: Some(170.0),
//!         weight: Some(70.0),
//!     };
//!
//!     let record = ingestion.create(draft).await?;
//!     println!("bmi: {}, verdict: {}", record.bmi(), record.verdict());
//!
//!     let sorted = query.sort_by("bmi", "asc").await?;
//!     println!("{} records", sorted.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Persistence Model
//!
//! The collection lives in one JSON document keyed by patient id. Every
//! operation reloads the whole file and every write rewrites it; there is no
//! locking, so concurrent writers race and the last save wins. That
//! limitation is accepted and documented rather than engineered around.
//!
//! ## Derived Fields
//!
//! `bmi` and `verdict` are computed from the stored height and weight on
//! every read and are never persisted. The BMI formula divides weight by the
//! square of height as stored (centimeters), matching the system this
//! service replaces; see [`domain::patient`] for details.
//!
//! ## Error Handling
//!
//! Vitalis uses [`domain::VitalisError`] for all errors:
//!
//! ```rust,no_run
//! use vitalis::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let config = vitalis::config::load_config("vitalis.toml")?;
//!     let _ = config;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod logging;
pub mod storage;
