//! Persisted patient collection
//!
//! The collection is a mapping from patient id to a loosely-typed attribute
//! object. Attributes stay as JSON values on purpose: the store tolerates
//! records written by earlier versions of the data file, and the query layer
//! substitutes defaults for missing numeric fields rather than rejecting the
//! record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Mapping from patient id to stored attributes
///
/// Serializes transparently as a JSON object, matching the on-disk layout:
/// `{"P001": {"name": ..., "city": ..., ...}, ...}`. The id is the key and
/// never duplicated inside the value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientCollection(Map<String, Value>);

impl PatientCollection {
    /// Creates an empty collection
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Returns true if a record with the given id exists
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Returns the stored attributes for the given id, if present
    pub fn get(&self, id: &str) -> Option<&Value> {
        self.0.get(id)
    }

    /// Inserts or replaces the attributes stored under the given id
    pub fn insert(&mut self, id: String, attributes: Value) {
        self.0.insert(id, attributes);
    }

    /// Returns the number of records in the collection
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the collection holds no records
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over (id, attributes) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Iterates over stored attribute objects
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.values()
    }

    /// Returns the underlying id-to-attributes map
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for PatientCollection {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_collection_serializes_as_empty_object() {
        let collection = PatientCollection::new();
        assert_eq!(serde_json::to_string(&collection).unwrap(), "{}");
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut collection = PatientCollection::new();
        collection.insert("P001".to_string(), json!({"name": "Asha", "height": 170.0}));

        assert!(collection.contains("P001"));
        assert!(!collection.contains("P002"));
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get("P001").unwrap()["name"], "Asha");
    }

    #[test]
    fn test_round_trip_through_json() {
        let raw = r#"{"P001":{"name":"Asha","city":"Pune","age":30,"gender":"Female","height":170.0,"weight":70.0}}"#;
        let collection: PatientCollection = serde_json::from_str(raw).unwrap();
        assert_eq!(collection.len(), 1);

        let back = serde_json::to_string(&collection).unwrap();
        let reparsed: PatientCollection = serde_json::from_str(&back).unwrap();
        assert_eq!(collection, reparsed);
    }
}
