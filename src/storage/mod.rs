//! Record store implementations
//!
//! This module provides the [`RecordStore`] abstraction over the persisted
//! patient collection and its two implementations:
//!
//! - [`JsonFileStore`] - single JSON file on local disk (production)
//! - [`MemoryStore`] - in-memory map (test double)

pub mod file;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::RecordStore;
