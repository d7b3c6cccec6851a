//! HTTP error envelope
//!
//! Maps domain errors onto status codes and the `{"detail": ...}` body shape
//! the API exposes. Storage failures are logged server-side and surfaced as
//! an opaque 500.

use crate::domain::VitalisError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// API-level error returned by handlers
#[derive(Debug)]
pub enum ApiError {
    /// 400 with a descriptive detail message
    BadRequest(String),
    /// 404 with a detail message
    NotFound(String),
    /// 422 with the list of violated constraints
    UnprocessableEntity(Vec<String>),
    /// 500, cause already logged
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "detail": detail }))).into_response()
            }
            ApiError::NotFound(detail) => {
                (StatusCode::NOT_FOUND, Json(json!({ "detail": detail }))).into_response()
            }
            ApiError::UnprocessableEntity(violations) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": violations })),
            )
                .into_response(),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": "Internal server error" })),
            )
                .into_response(),
        }
    }
}

impl From<VitalisError> for ApiError {
    fn from(err: VitalisError) -> Self {
        match err {
            VitalisError::Validation(report) => {
                ApiError::UnprocessableEntity(report.violations)
            }
            VitalisError::NotFound(detail) => ApiError::NotFound(detail),
            VitalisError::Conflict(detail) => ApiError::BadRequest(detail),
            VitalisError::InvalidArgument(detail) => ApiError::BadRequest(detail),
            other => {
                tracing::error!(error = %other, "Request failed");
                ApiError::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StorageError, ValidationError};

    #[test]
    fn test_conflict_maps_to_bad_request() {
        let err: ApiError =
            VitalisError::Conflict("Patient with this ID already exists".to_string()).into();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err: ApiError = VitalisError::NotFound("Patient not found".to_string()).into();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_validation_maps_to_422_with_violations() {
        let err: ApiError = VitalisError::Validation(ValidationError::new(vec![
            "age is required".to_string(),
        ]))
        .into();
        let ApiError::UnprocessableEntity(violations) = err else {
            panic!("expected 422 mapping");
        };
        assert_eq!(violations, vec!["age is required".to_string()]);
    }

    #[test]
    fn test_storage_maps_to_internal() {
        let err: ApiError =
            VitalisError::Storage(StorageError::Missing("data.json".to_string())).into();
        assert!(matches!(err, ApiError::Internal));
    }
}
