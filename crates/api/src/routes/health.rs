use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Root banner payload.
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET / -- service banner.
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Clothing Tracker API",
    })
}

/// GET /api/health -- liveness probe. Does not touch the database.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Mount the banner and health routes at the root level.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health_check))
}
