//! Domain models and types for Vitalis.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`PatientId`])
//! - **The validated patient model** ([`PatientRecord`], [`PatientDraft`], [`Gender`])
//! - **The persisted collection shape** ([`PatientCollection`])
//! - **Error types** ([`VitalisError`], [`StorageError`], [`ValidationError`])
//! - **Result type alias** ([`Result`])
//!
//! # Validation
//!
//! Records are constructed through a validating factory that aggregates every
//! violated constraint rather than failing fast:
//!
//! ```rust
//! use vitalis::domain::{PatientDraft, PatientRecord};
//!
//! let draft = PatientDraft {
//!     id: Some("P001".to_string()),
//!     name: Some("Asha Rao".to_string()),
//!     city: Some("Pune".to_string()),
//!     age: Some(30),
//!     gender: Some("Female".to_string()),
//!     height: Some(170.0),
//!     weight: Some(70.0),
//! };
//!
//! let record = PatientRecord::new(draft).expect("valid draft");
//! let _bmi = record.bmi();
//! let _verdict = record.verdict();
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, VitalisError>`]:
//!
//! ```rust
//! use vitalis::domain::{Result, VitalisError};
//!
//! fn example() -> Result<()> {
//!     Err(VitalisError::NotFound("Patient not found".to_string()))
//! }
//! ```

pub mod collection;
pub mod errors;
pub mod ids;
pub mod patient;
pub mod result;

// Re-export commonly used types for convenience
pub use collection::PatientCollection;
pub use errors::{StorageError, ValidationError, VitalisError};
pub use ids::PatientId;
pub use patient::{round2, verdict_for_bmi, Gender, PatientDraft, PatientRecord};
pub use result::Result;
