//! In-memory record store
//!
//! Test double for [`RecordStore`]. Holds the collection behind a mutex and
//! mirrors the whole-collection load/save contract of the file store.

use crate::domain::{PatientCollection, Result};
use crate::storage::traits::RecordStore;
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Record store that keeps the collection in memory
///
/// Useful for unit and integration tests that exercise the query and
/// ingestion services without touching the filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<PatientCollection>,
}

impl MemoryStore {
    /// Creates an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given collection
    pub fn with_collection(collection: PatientCollection) -> Self {
        Self {
            records: Mutex::new(collection),
        }
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn load(&self) -> Result<PatientCollection> {
        Ok(self.records.lock().await.clone())
    }

    async fn save(&self, collection: &PatientCollection) -> Result<()> {
        *self.records.lock().await = collection.clone();
        Ok(())
    }
}
