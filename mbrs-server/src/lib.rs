//! mbrs-server library - Service Membership API
//!
//! Backend API for managing gym/salon/coaching memberships: members, plans,
//! subscriptions and check-ins over JSON/HTTP.

pub mod api;
pub mod db;
pub mod error;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Service title reported at startup
pub const SERVICE_TITLE: &str = "Service Membership API";

/// Service description reported at startup
pub const SERVICE_DESCRIPTION: &str = "Backend API for managing gym/salon/coaching memberships";

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool; handlers check out one connection or
    /// transaction per request
    pub db: SqlitePool,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::member_routes())
        .merge(api::plan_routes())
        .merge(api::subscription_routes())
        .merge(api::attendance_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
