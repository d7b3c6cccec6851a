//! HTTP server setup
//!
//! Builds the axum router over the query and ingestion services and runs it
//! with graceful shutdown.

use crate::config::VitalisConfig;
use crate::core::{IngestionService, QueryService};
use crate::domain::{Result, VitalisError};
use crate::http::handlers;
use crate::storage::{JsonFileStore, RecordStore};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::sync::watch;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Read-side service
    pub query: QueryService,
    /// Write-side service
    pub ingestion: IngestionService,
}

impl AppState {
    /// Creates application state over a record store backend
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            query: QueryService::new(store.clone()),
            ingestion: IngestionService::new(store),
        }
    }
}

/// Builds the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/data", get(handlers::data))
        .route("/patients/:patient_id", get(handlers::get_patient))
        .route("/patient_info/:patient_info", get(handlers::patient_info))
        .route("/sortf", get(handlers::sort_patients))
        .route("/create", post(handlers::create_patient))
        .with_state(state)
}

/// Runs the HTTP server until the shutdown signal fires
///
/// Builds the file-backed record store from configuration, optionally seeds
/// an empty data file, binds the listener, and serves the router.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails while
/// running.
pub async fn run(config: &VitalisConfig, mut shutdown: watch::Receiver<bool>) -> Result<()> {
    let store = Arc::new(JsonFileStore::new(&config.storage.data_path));
    if config.storage.create_if_missing {
        store.seed_if_missing().await?;
    }

    let state = AppState::new(store);
    let app = router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| VitalisError::Io(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(
        addr = %addr,
        data_path = %config.storage.data_path,
        "HTTP server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown.changed().await;
            tracing::info!("Shutting down HTTP server");
        })
        .await
        .map_err(|e| VitalisError::Io(e.to_string()))?;

    Ok(())
}
