//! Record store abstraction
//!
//! The core services depend only on this trait, which makes the persisted
//! collection swappable: a JSON file in production, an in-memory map in
//! tests.

use crate::domain::{PatientCollection, Result};
use async_trait::async_trait;

/// Whole-collection load/save over the persisted patient document
///
/// Every operation reads or writes the entire collection. There is no
/// locking and no partial update; concurrent writers race and the last
/// `save` wins. That is an accepted limitation of the system, not something
/// implementations are expected to defend against.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Loads the entire persisted collection
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backing resource is missing,
    /// unreadable, or not a JSON object of attribute objects.
    async fn load(&self) -> Result<PatientCollection>;

    /// Persists the entire collection, replacing the previous contents
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backing resource cannot be written.
    async fn save(&self, collection: &PatientCollection) -> Result<()>;
}
