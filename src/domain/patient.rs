//! Patient record model and validation
//!
//! This module defines the validated [`PatientRecord`] together with its raw
//! input form [`PatientDraft`]. Construction validates every field and
//! aggregates all constraint violations into a single [`ValidationError`]
//! instead of failing on the first one.
//!
//! The derived fields `bmi` and `verdict` are pure functions of `height` and
//! `weight`. They are recomputed on every access and are never persisted.
//!
//! Note on units: `height` is documented in centimeters but the BMI formula
//! divides by `height^2` without converting to meters. This reproduces the
//! behavior of the system this service replaces and is kept deliberately; the
//! classification thresholds are applied to whatever the formula yields.

use crate::domain::errors::ValidationError;
use crate::domain::ids::PatientId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;
use std::str::FromStr;

/// Patient gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other
    Other,
}

impl Gender {
    /// Returns the gender as the exact string stored in the collection
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            "Other" => Ok(Gender::Other),
            other => Err(format!(
                "gender must be one of Male, Female, Other (got '{other}')"
            )),
        }
    }
}

/// Raw patient input before validation
///
/// This is the shape of a `POST /create` request body. Every field is
/// optional at this stage so validation can report missing fields alongside
/// out-of-range ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientDraft {
    /// ID of the patient
    pub id: Option<String>,
    /// Name of the patient
    pub name: Option<String>,
    /// City of the patient
    pub city: Option<String>,
    /// Age of the patient
    pub age: Option<i64>,
    /// Gender of the patient (Male, Female or Other)
    pub gender: Option<String>,
    /// Height of the patient in cm
    pub height: Option<f64>,
    /// Weight of the patient in kg
    pub weight: Option<f64>,
}

/// A validated, immutable patient record
///
/// Constructed only through [`PatientRecord::new`], which guarantees every
/// field satisfies its constraint. `bmi` and `verdict` are derived on access.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientRecord {
    id: PatientId,
    name: String,
    city: String,
    age: i64,
    gender: Gender,
    height: f64,
    weight: f64,
}

impl PatientRecord {
    /// Validates a draft into a patient record
    ///
    /// Checks all fields and collects every violated constraint, so the
    /// caller sees the full list of problems in one pass.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] enumerating every violation: missing
    /// required fields, empty strings, age outside (0, 120), non-positive
    /// height or weight, or a gender outside the enumerated set.
    pub fn new(draft: PatientDraft) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();

        let id = match draft.id.as_deref() {
            Some(s) if !s.trim().is_empty() => PatientId::new(s).ok(),
            Some(_) => {
                violations.push("id must not be empty".to_string());
                None
            }
            None => {
                violations.push("id is required".to_string());
                None
            }
        };

        let name = require_non_empty("name", draft.name, &mut violations);
        let city = require_non_empty("city", draft.city, &mut violations);

        let age = match draft.age {
            Some(age) if age > 0 && age < 120 => Some(age),
            Some(age) => {
                violations.push(format!(
                    "age must be strictly between 0 and 120 (got {age})"
                ));
                None
            }
            None => {
                violations.push("age is required".to_string());
                None
            }
        };

        let gender = match draft.gender.as_deref() {
            Some(s) => match s.parse::<Gender>() {
                Ok(gender) => Some(gender),
                Err(message) => {
                    violations.push(message);
                    None
                }
            },
            None => {
                violations.push("gender is required".to_string());
                None
            }
        };

        let height = require_positive("height", draft.height, &mut violations);
        let weight = require_positive("weight", draft.weight, &mut violations);

        match (id, name, city, age, gender, height, weight) {
            (Some(id), Some(name), Some(city), Some(age), Some(gender), Some(height), Some(weight))
                if violations.is_empty() =>
            {
                Ok(Self {
                    id,
                    name,
                    city,
                    age,
                    gender,
                    height,
                    weight,
                })
            }
            _ => Err(ValidationError::new(violations)),
        }
    }

    /// Returns the patient identifier
    pub fn id(&self) -> &PatientId {
        &self.id
    }

    /// Returns the patient name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the patient city
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the patient age
    pub fn age(&self) -> i64 {
        self.age
    }

    /// Returns the patient gender
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Returns the patient height in cm
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the patient weight in kg
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Calculates the Body Mass Index of the patient
    ///
    /// `bmi = round(weight / height^2, 2)`, with height used exactly as
    /// stored. Recomputed on every call, never cached.
    pub fn bmi(&self) -> f64 {
        round2(self.weight / (self.height * self.height))
    }

    /// Classifies the patient's BMI into a weight-status band
    ///
    /// The band boundaries are applied verbatim: values in `24.9..25` fall
    /// through to "Obesity". That gap is intentional parity with the system
    /// this service replaces.
    pub fn verdict(&self) -> &'static str {
        verdict_for_bmi(self.bmi())
    }

    /// Returns the stored attribute object for this record
    ///
    /// The id is the collection key and is excluded here; derived fields are
    /// excluded as well since they are recomputed on read.
    pub fn attributes(&self) -> Map<String, Value> {
        let mut attributes = Map::new();
        attributes.insert("name".to_string(), Value::String(self.name.clone()));
        attributes.insert("city".to_string(), Value::String(self.city.clone()));
        attributes.insert("age".to_string(), Value::Number(Number::from(self.age)));
        attributes.insert(
            "gender".to_string(),
            Value::String(self.gender.as_str().to_string()),
        );
        attributes.insert("height".to_string(), json_number(self.height));
        attributes.insert("weight".to_string(), json_number(self.weight));
        attributes
    }
}

/// Classifies a BMI value into its weight-status band
pub fn verdict_for_bmi(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "Underweight"
    } else if (18.5..24.9).contains(&bmi) {
        "Normal weight"
    } else if (25.0..29.9).contains(&bmi) {
        "Overweight"
    } else {
        "Obesity"
    }
}

/// Rounds a value to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn require_non_empty(
    field: &str,
    value: Option<String>,
    violations: &mut Vec<String>,
) -> Option<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Some(s),
        Some(_) => {
            violations.push(format!("{field} must not be empty"));
            None
        }
        None => {
            violations.push(format!("{field} is required"));
            None
        }
    }
}

fn require_positive(
    field: &str,
    value: Option<f64>,
    violations: &mut Vec<String>,
) -> Option<f64> {
    match value {
        Some(v) if v > 0.0 => Some(v),
        Some(v) => {
            violations.push(format!("{field} must be greater than 0 (got {v})"));
            None
        }
        None => {
            violations.push(format!("{field} is required"));
            None
        }
    }
}

fn json_number(value: f64) -> Value {
    Number::from_f64(value).map(Value::Number).unwrap_or(Value::Null)
}
