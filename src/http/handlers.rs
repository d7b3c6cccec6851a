//! HTTP request handlers
//!
//! Thin routing layer translating requests to the query and ingestion
//! services and mapping outcomes to status codes.
//!
//! Two lookup endpoints exist with deliberately different not-found
//! behavior: `/patients/{id}` answers 200 with an in-band error message,
//! while `/patient_info/{id}` answers a proper 404. Both are kept distinct
//! for parity with the system this service replaces.

use crate::domain::{PatientDraft, VitalisError};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

/// Query parameters for the sort endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SortParams {
    /// Field to sort by (height, weight or bmi); required
    pub sort_by: Option<String>,
    /// Sort direction, defaults to ascending
    #[serde(default = "default_order")]
    pub order: String,
}

fn default_order() -> String {
    "asc".to_string()
}

/// GET /
pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Hello, World!" }))
}

/// GET /data - the full collection wrapped in a data envelope
pub async fn data(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let collection = state.query.list_all().await?;
    Ok(Json(json!({ "data": collection })))
}

/// GET /patients/{patient_id}
///
/// Returns the stored attributes, or a 200 response carrying
/// `{"error": "Patient not found"}` when the id is unknown.
pub async fn get_patient(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Result<Response, ApiError> {
    tracing::debug!(patient_id = %patient_id, "Looking up patient");

    match state.query.get_by_id(&patient_id).await {
        Ok(attributes) => Ok(Json(attributes).into_response()),
        Err(VitalisError::NotFound(_)) => {
            Ok(Json(json!({ "error": "Patient not found" })).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// GET /patient_info/{patient_info}
///
/// Same lookup as `/patients/{id}` but an unknown id is a real 404.
pub async fn patient_info(
    State(state): State<AppState>,
    Path(patient_info): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::debug!(patient_id = %patient_info, "Looking up patient info");

    let attributes = state.query.get_by_id(&patient_info).await?;
    Ok(Json(attributes))
}

/// GET /sortf?sort_by=<field>&order=<asc|desc>
pub async fn sort_patients(
    State(state): State<AppState>,
    Query(params): Query<SortParams>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(sort_by) = params.sort_by else {
        return Err(ApiError::UnprocessableEntity(vec![
            "sort_by: field required".to_string(),
        ]));
    };

    tracing::debug!(sort_by = %sort_by, order = %params.order, "Sorting patients");

    let sorted = state.query.sort_by(&sort_by, &params.order).await?;
    Ok(Json(json!({ "data": sorted })))
}

/// POST /create
pub async fn create_patient(
    State(state): State<AppState>,
    Json(draft): Json<PatientDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state.ingestion.create(draft).await?;

    tracing::info!(patient_id = %record.id(), "Patient created via API");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Patient created successfully" })),
    ))
}
