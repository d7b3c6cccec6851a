//! Domain identifier types with validation
//!
//! This module provides the newtype wrapper for patient identifiers.
//! The type ensures type safety and rejects empty identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Patient identifier newtype wrapper
///
/// Represents the unique key of a patient record in the collection.
/// Any non-empty string is accepted (e.g. "P001").
///
/// # Examples
///
/// ```
/// use vitalis::domain::ids::PatientId;
/// use std::str::FromStr;
///
/// let patient_id = PatientId::from_str("P001").unwrap();
/// assert_eq!(patient_id.as_str(), "P001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatientId(String);

impl PatientId {
    /// Creates a new PatientId from a string
    ///
    /// # Arguments
    ///
    /// * `id` - The patient identifier string
    ///
    /// # Returns
    ///
    /// Returns `Ok(PatientId)` if the ID is non-empty, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Patient ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the patient ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PatientId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for PatientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_id_valid() {
        let id = PatientId::new("P001").unwrap();
        assert_eq!(id.as_str(), "P001");
        assert_eq!(id.to_string(), "P001");
    }

    #[test]
    fn test_patient_id_empty_rejected() {
        assert!(PatientId::new("").is_err());
        assert!(PatientId::new("   ").is_err());
    }

    #[test]
    fn test_patient_id_from_str() {
        let id: PatientId = "P042".parse().unwrap();
        assert_eq!(id.into_inner(), "P042");
    }
}
