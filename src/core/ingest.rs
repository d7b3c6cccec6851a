//! Ingestion service
//!
//! Write-side operation over the patient collection: validate a draft,
//! reject duplicate ids, insert, and persist the whole collection.

use crate::domain::{PatientDraft, PatientRecord, Result, VitalisError};
use crate::storage::RecordStore;
use serde_json::Value;
use std::sync::Arc;

/// Write-side service over the record store
#[derive(Clone)]
pub struct IngestionService {
    /// Record store backend
    store: Arc<dyn RecordStore>,
}

impl IngestionService {
    /// Creates a new IngestionService over a record store backend
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Validates and inserts a new patient record
    ///
    /// Validation runs before the store is touched; a duplicate id leaves
    /// the persisted collection unchanged. On success the whole collection
    /// is rewritten with the new record's attributes stored under its id.
    ///
    /// # Errors
    ///
    /// - `Validation` with every violated constraint if the draft is invalid
    /// - `Conflict` if a record with the same id already exists
    /// - `Storage` if the collection cannot be loaded or saved
    pub async fn create(&self, draft: PatientDraft) -> Result<PatientRecord> {
        let record = PatientRecord::new(draft)?;

        let mut collection = self.store.load().await?;
        if collection.contains(record.id().as_str()) {
            return Err(VitalisError::Conflict(
                "Patient with this ID already exists".to_string(),
            ));
        }

        collection.insert(
            record.id().as_str().to_string(),
            Value::Object(record.attributes()),
        );
        self.store.save(&collection).await?;

        tracing::info!(
            patient_id = %record.id(),
            records = collection.len(),
            "Patient created"
        );

        Ok(record)
    }
}
