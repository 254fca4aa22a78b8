//! Subscription endpoints
//!
//! - `POST /subscriptions/`: grant a plan to a member from a start date
//! - `GET /subscriptions/:member_id/current-subscription`: the subscription
//!   covering today

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use mbrs_common::api::{CreateSubscriptionRequest, SubscriptionResponse};
use mbrs_common::time;
use tracing::info;

use super::extract::{Json, Path};
use crate::{db, ApiError, ApiResult, AppState};

/// POST /subscriptions/
///
/// `end_date` is `start_date + plan.duration_days` and is never recomputed.
///
/// **Errors:**
/// - 404: member not found (checked before the plan)
/// - 404: plan not found
/// - 400: computed end date outside the calendar range
pub async fn create_subscription(
    State(state): State<AppState>,
    Json(payload): Json<CreateSubscriptionRequest>,
) -> ApiResult<Json<SubscriptionResponse>> {
    let mut tx = db::begin_write(&state.db).await?;

    let member = db::members::find_by_id(&mut tx, payload.member_id).await?;
    let plan = db::plans::find_by_id(&mut tx, payload.plan_id).await?;

    if member.is_none() {
        return Err(ApiError::NotFound("Member not found".to_string()));
    }
    let plan = plan.ok_or_else(|| ApiError::NotFound("Plan not found".to_string()))?;

    let end_date = time::end_date_for(payload.start_date, plan.duration_days)?;

    let subscription = db::subscriptions::insert(
        &mut tx,
        payload.member_id,
        plan.id,
        payload.start_date,
        end_date,
    )
    .await?;

    tx.commit().await?;

    info!(
        "Created subscription {} for member {} on plan {} ({} to {})",
        subscription.id,
        subscription.member_id,
        subscription.plan_id,
        subscription.start_date,
        subscription.end_date
    );
    Ok(Json(subscription.into()))
}

/// GET /subscriptions/:member_id/current-subscription
///
/// When several subscriptions cover today, the earliest created one wins.
pub async fn current_subscription(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
) -> ApiResult<Json<SubscriptionResponse>> {
    let mut conn = state.db.acquire().await?;

    db::subscriptions::find_active(&mut conn, member_id, time::today())
        .await?
        .map(|sub| Json(sub.into()))
        .ok_or_else(|| ApiError::NotFound("No active subscription".to_string()))
}

/// Build subscription routes
pub fn subscription_routes() -> Router<AppState> {
    Router::new()
        .route("/subscriptions/", post(create_subscription))
        .route("/subscriptions", post(create_subscription))
        .route(
            "/subscriptions/:member_id/current-subscription",
            get(current_subscription),
        )
}
