//! HTTP surface
//!
//! Thin axum layer over the core services:
//!
//! - [`server`] - router construction and serving with graceful shutdown
//! - [`handlers`] - one handler per endpoint
//! - [`error`] - domain-error to status-code/envelope mapping

pub mod error;
pub mod handlers;
pub mod server;

// Re-export commonly used items
pub use error::ApiError;
pub use server::{router, run, AppState};
