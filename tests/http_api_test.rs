//! Integration tests for the HTTP surface
//!
//! Exercises the axum router end-to-end over an in-memory record store
//! (and, for persistence checks, a temp-file JSON store).

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use vitalis::http::{router, AppState};
use vitalis::storage::{JsonFileStore, MemoryStore, RecordStore};

fn app_with_store(store: Arc<dyn RecordStore>) -> Router {
    router(AppState::new(store))
}

fn empty_app() -> Router {
    app_with_store(Arc::new(MemoryStore::new()))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn valid_patient(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Asha Rao",
        "city": "Pune",
        "age": 30,
        "gender": "Female",
        "height": 170.0,
        "weight": 70.0,
    })
}

#[tokio::test]
async fn test_root_returns_hello_world() {
    let response = empty_app().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"message": "Hello, World!"}));
}

#[tokio::test]
async fn test_data_empty_collection() {
    let response = empty_app().oneshot(get("/data")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"data": {}}));
}

#[tokio::test]
async fn test_sortf_empty_collection() {
    let response = empty_app()
        .oneshot(get("/sortf?sort_by=bmi"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"data": []}));
}

#[tokio::test]
async fn test_create_then_lookup_round_trip() {
    let app = empty_app();

    let response = app
        .clone()
        .oneshot(post_json("/create", &valid_patient("P001")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Patient created successfully"})
    );

    let response = app.clone().oneshot(get("/patients/P001")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let attributes = body_json(response).await;
    assert_eq!(attributes["name"], "Asha Rao");
    assert_eq!(attributes["height"], 170.0);
    assert_eq!(attributes["weight"], 70.0);
    // id is the key, not part of the stored value
    assert!(attributes.get("id").is_none());
}

#[tokio::test]
async fn test_duplicate_create_is_rejected_without_mutation() {
    let store = Arc::new(MemoryStore::new());
    let app = app_with_store(store.clone());

    app.clone()
        .oneshot(post_json("/create", &valid_patient("P001")))
        .await
        .unwrap();
    let before = store.load().await.unwrap();

    let mut duplicate = valid_patient("P001");
    duplicate["name"] = json!("Someone Else");
    let response = app
        .clone()
        .oneshot(post_json("/create", &duplicate))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"detail": "Patient with this ID already exists"})
    );
    assert_eq!(store.load().await.unwrap(), before);
}

#[tokio::test]
async fn test_create_validation_failure_returns_422() {
    let invalid = json!({
        "id": "P010",
        "name": "",
        "city": "Pune",
        "age": 130,
        "gender": "Unknown",
        "height": 170.0,
        "weight": 70.0,
    });

    let response = empty_app()
        .oneshot(post_json("/create", &invalid))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    let violations = body["detail"].as_array().unwrap();
    assert_eq!(violations.len(), 3);
}

#[tokio::test]
async fn test_patients_unknown_id_is_in_band_error_with_200() {
    let response = empty_app().oneshot(get("/patients/P404")).await.unwrap();
    // Deliberate inconsistency: success envelope carrying an error message
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"error": "Patient not found"}));
}

#[tokio::test]
async fn test_patient_info_unknown_id_is_404() {
    let response = empty_app()
        .oneshot(get("/patient_info/P404"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"detail": "Patient not found"}));
}

#[tokio::test]
async fn test_patient_info_known_id_returns_attributes() {
    let app = empty_app();
    app.clone()
        .oneshot(post_json("/create", &valid_patient("P001")))
        .await
        .unwrap();

    let response = app.clone().oneshot(get("/patient_info/P001")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let attributes = body_json(response).await;
    assert_eq!(attributes["city"], "Pune");
    // Derived fields are never stored
    assert!(attributes.get("bmi").is_none());
    assert!(attributes.get("verdict").is_none());
}

#[tokio::test]
async fn test_sortf_invalid_field_lists_valid_ones() {
    let response = empty_app()
        .oneshot(get("/sortf?sort_by=age"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("height"));
    assert!(detail.contains("weight"));
    assert!(detail.contains("bmi"));
}

#[tokio::test]
async fn test_sortf_invalid_order() {
    let response = empty_app()
        .oneshot(get("/sortf?sort_by=height&order=upward"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"detail": "Order must be either asc or desc"})
    );
}

#[tokio::test]
async fn test_sortf_missing_sort_by_is_422() {
    let response = empty_app().oneshot(get("/sortf")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_sortf_orders_records_and_defaults_to_asc() {
    let app = empty_app();
    for (id, weight) in [("P001", 90.0), ("P002", 60.0), ("P003", 75.0)] {
        let mut patient = valid_patient(id);
        patient["weight"] = json!(weight);
        app.clone()
            .oneshot(post_json("/create", &patient))
            .await
            .unwrap();
    }

    let response = app
        .clone()
        .oneshot(get("/sortf?sort_by=weight"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let weights: Vec<f64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["weight"].as_f64().unwrap())
        .collect();
    assert_eq!(weights, vec![60.0, 75.0, 90.0]);

    let response = app
        .clone()
        .oneshot(get("/sortf?sort_by=weight&order=desc"))
        .await
        .unwrap();
    let body = body_json(response).await;
    let weights: Vec<f64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["weight"].as_f64().unwrap())
        .collect();
    assert_eq!(weights, vec![90.0, 75.0, 60.0]);
}

#[tokio::test]
async fn test_storage_failure_surfaces_as_500() {
    // Store pointed at a directory that does not exist
    let store = Arc::new(JsonFileStore::new("/nonexistent/vitalis/data.json"));
    let app = app_with_store(store);

    let response = app.oneshot(get("/data")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({"detail": "Internal server error"})
    );
}

#[tokio::test]
async fn test_create_persists_through_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, "{}").unwrap();

    let app = app_with_store(Arc::new(JsonFileStore::new(&path)));
    let response = app
        .clone()
        .oneshot(post_json("/create", &valid_patient("P001")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // A fresh store over the same file sees the write
    let reopened = app_with_store(Arc::new(JsonFileStore::new(&path)));
    let response = reopened.oneshot(get("/data")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["P001"]["name"], "Asha Rao");
}
