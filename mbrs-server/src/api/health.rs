//! Health check endpoint

use axum::{extract::State, http::StatusCode, routing::get, Router};
use serde::Serialize;
use tracing::warn;

use super::extract::Json;
use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "ok", or "degraded" when the database does not answer
    pub status: String,
    pub module: String,
    pub version: String,
    /// "ok" or the store error
    pub database: String,
}

/// GET /health
///
/// Runs a trivial query against the pool; 503 when it fails.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, code, database) = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => ("ok", StatusCode::OK, "ok".to_string()),
        Err(e) => {
            warn!("Health check database query failed: {}", e);
            ("degraded", StatusCode::SERVICE_UNAVAILABLE, e.to_string())
        }
    };

    (
        code,
        Json(HealthResponse {
            status: status.to_string(),
            module: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database,
        }),
    )
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
