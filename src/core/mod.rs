//! Business logic for Vitalis
//!
//! This module contains the services the HTTP surface is built on:
//!
//! - [`query`] - lookup by id, full listing, field-based sorting
//! - [`ingest`] - validated record creation
//!
//! Each service holds an `Arc<dyn RecordStore>` and performs a full load
//! (and, for writes, a full save) per operation. No state is shared between
//! requests.

pub mod ingest;
pub mod query;

// Re-export commonly used types
pub use ingest::IngestionService;
pub use query::{QueryService, SortField, SortOrder, VALID_SORT_FIELDS};
