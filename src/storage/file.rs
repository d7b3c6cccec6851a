//! JSON file record store
//!
//! Persists the patient collection as a single JSON document on local disk.
//! Each load reads and parses the whole file; each save rewrites it.

use crate::domain::{PatientCollection, Result, StorageError};
use crate::storage::traits::RecordStore;
use async_trait::async_trait;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Record store backed by a single JSON file
///
/// The file holds an object keyed by patient id:
///
/// ```json
/// {"P001": {"name": "Asha Rao", "city": "Pune", "age": 30,
///           "gender": "Female", "height": 170.0, "weight": 70.0}}
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store over the given data file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes an empty collection if the data file does not exist yet
    ///
    /// Startup convenience for the serve command; `load` itself still fails
    /// on a missing file.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the seed write fails.
    pub async fn seed_if_missing(&self) -> Result<()> {
        if tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(());
        }

        tracing::info!(path = %self.path.display(), "Seeding empty data file");
        self.save(&PatientCollection::new()).await
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn load(&self) -> Result<PatientCollection> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StorageError::Missing(self.display_path())
            } else {
                StorageError::Unreadable {
                    path: self.display_path(),
                    message: e.to_string(),
                }
            }
        })?;

        let document: Value = serde_json::from_str(&contents).map_err(|e| {
            StorageError::InvalidFormat(format!("{}: {e}", self.display_path()))
        })?;

        let map = match document {
            Value::Object(map) => map,
            other => {
                return Err(StorageError::InvalidFormat(format!(
                    "{}: expected a JSON object keyed by patient id, got {}",
                    self.display_path(),
                    json_type_name(&other)
                ))
                .into());
            }
        };

        for (id, attributes) in &map {
            if !attributes.is_object() {
                return Err(StorageError::InvalidFormat(format!(
                    "{}: record '{id}' is not an attribute object",
                    self.display_path()
                ))
                .into());
            }
        }

        tracing::debug!(
            path = %self.path.display(),
            records = map.len(),
            "Loaded patient collection"
        );

        Ok(PatientCollection::from(map))
    }

    async fn save(&self, collection: &PatientCollection) -> Result<()> {
        let contents = serde_json::to_string(collection)?;

        tokio::fs::write(&self.path, contents)
            .await
            .map_err(|e| StorageError::WriteFailed {
                path: self.display_path(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            path = %self.path.display(),
            records = collection.len(),
            "Saved patient collection"
        );

        Ok(())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
