//! Plan endpoints

use axum::{extract::State, routing::get, Router};
use mbrs_common::api::{CreatePlanRequest, PlanResponse};
use tracing::info;

use super::extract::Json;
use crate::{db, ApiResult, AppState};

/// POST /plans/
///
/// No validation beyond the request shape.
pub async fn create_plan(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlanRequest>,
) -> ApiResult<Json<PlanResponse>> {
    let mut tx = db::begin_write(&state.db).await?;
    let plan =
        db::plans::insert(&mut tx, &payload.name, payload.price, payload.duration_days).await?;
    tx.commit().await?;

    info!(
        "Created plan {} ({}, {} days)",
        plan.id, plan.name, plan.duration_days
    );
    Ok(Json(plan.into()))
}

/// GET /plans/
pub async fn list_plans(State(state): State<AppState>) -> ApiResult<Json<Vec<PlanResponse>>> {
    let mut conn = state.db.acquire().await?;
    let plans = db::plans::list(&mut conn).await?;
    Ok(Json(plans.into_iter().map(PlanResponse::from).collect()))
}

/// Build plan routes (with and without trailing slash)
pub fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/plans/", get(list_plans).post(create_plan))
        .route("/plans", get(list_plans).post(create_plan))
}
