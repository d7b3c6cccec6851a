//! Query service
//!
//! Read-side operations over the patient collection: lookup by id, full
//! listing, and field-based sorting. Every operation performs its own full
//! load from the record store; nothing is cached between calls.

use crate::domain::{round2, PatientCollection, Result, VitalisError};
use crate::storage::RecordStore;
use serde_json::Value;
use std::cmp::Ordering;
use std::str::FromStr;
use std::sync::Arc;

/// Fields the collection can be sorted by
pub const VALID_SORT_FIELDS: [&str; 3] = ["height", "weight", "bmi"];

/// Sort key selector
///
/// `height` and `weight` read the stored attribute; `bmi` is derived from
/// the stored height and weight at sort time since it is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Stored height attribute
    Height,
    /// Stored weight attribute
    Weight,
    /// BMI derived from stored height and weight
    Bmi,
}

impl FromStr for SortField {
    type Err = VitalisError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "height" => Ok(SortField::Height),
            "weight" => Ok(SortField::Weight),
            "bmi" => Ok(SortField::Bmi),
            _ => Err(VitalisError::InvalidArgument(format!(
                "Pick from valid fields only {VALID_SORT_FIELDS:?}"
            ))),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending
    Asc,
    /// Descending (ascending order reversed)
    Desc,
}

impl FromStr for SortOrder {
    type Err = VitalisError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(VitalisError::InvalidArgument(
                "Order must be either asc or desc".to_string(),
            )),
        }
    }
}

/// Read-side service over the record store
#[derive(Clone)]
pub struct QueryService {
    /// Record store backend
    store: Arc<dyn RecordStore>,
}

impl QueryService {
    /// Creates a new QueryService over a record store backend
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Looks up the stored attributes for a patient id
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record with the given id exists, or a
    /// `StorageError` if the collection cannot be loaded.
    pub async fn get_by_id(&self, id: &str) -> Result<Value> {
        let collection = self.store.load().await?;
        collection
            .get(id)
            .cloned()
            .ok_or_else(|| VitalisError::NotFound("Patient not found".to_string()))
    }

    /// Returns the entire loaded collection unmodified
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the collection cannot be loaded.
    pub async fn list_all(&self) -> Result<PatientCollection> {
        self.store.load().await
    }

    /// Returns all records ordered by the given field
    ///
    /// Records missing the field (or holding a non-numeric value) sort as if
    /// the field were 0. The ascending sort is stable; descending reverses
    /// the ascending order, so tie order under `desc` is the reverse of tie
    /// order under `asc`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `field` is not one of height/weight/bmi
    /// or `order` is not asc/desc, or a `StorageError` on load failure.
    pub async fn sort_by(&self, field: &str, order: &str) -> Result<Vec<Value>> {
        let field = SortField::from_str(field)?;
        let order = SortOrder::from_str(order)?;

        let collection = self.store.load().await?;
        let mut records: Vec<Value> = collection.values().cloned().collect();

        records.sort_by(|a, b| {
            sort_key(a, field)
                .partial_cmp(&sort_key(b, field))
                .unwrap_or(Ordering::Equal)
        });

        if order == SortOrder::Desc {
            records.reverse();
        }

        tracing::debug!(
            field = ?field,
            order = ?order,
            records = records.len(),
            "Sorted patient collection"
        );

        Ok(records)
    }
}

/// Extracts the sort key for a record, substituting 0 for missing fields
fn sort_key(attributes: &Value, field: SortField) -> f64 {
    match field {
        SortField::Height => numeric_attribute(attributes, "height"),
        SortField::Weight => numeric_attribute(attributes, "weight"),
        SortField::Bmi => {
            let height = attributes.get("height").and_then(Value::as_f64);
            let weight = attributes.get("weight").and_then(Value::as_f64);
            match (height, weight) {
                (Some(height), Some(weight)) if height > 0.0 => {
                    round2(weight / (height * height))
                }
                _ => 0.0,
            }
        }
    }
}

fn numeric_attribute(attributes: &Value, field: &str) -> f64 {
    attributes.get(field).and_then(Value::as_f64).unwrap_or(0.0)
}
