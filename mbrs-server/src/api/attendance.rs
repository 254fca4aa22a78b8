//! Attendance endpoints
//!
//! - `POST /attendance/check-in`: record a visit for a member holding a
//!   subscription that covers today
//! - `GET /attendance/:member_id`: a member's check-ins

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use mbrs_common::api::{AttendanceResponse, CheckInRequest};
use mbrs_common::time;
use tracing::{debug, info};

use super::extract::{Json, Path};
use crate::{db, ApiError, ApiResult, AppState};

/// POST /attendance/check-in
///
/// The member's `total_check_ins` column is left untouched.
///
/// **Errors:**
/// - 404: member not found
/// - 400: no subscription covers today
pub async fn check_in(
    State(state): State<AppState>,
    Json(payload): Json<CheckInRequest>,
) -> ApiResult<Json<AttendanceResponse>> {
    let mut tx = db::begin_write(&state.db).await?;

    if db::members::find_by_id(&mut tx, payload.member_id).await?.is_none() {
        return Err(ApiError::NotFound("Member not found".to_string()));
    }

    let today = time::today();
    if db::subscriptions::find_active(&mut tx, payload.member_id, today)
        .await?
        .is_none()
    {
        debug!(
            "Rejected check-in for member {}: no subscription covers {}",
            payload.member_id, today
        );
        return Err(ApiError::BadRequest(
            "No active subscription for this member".to_string(),
        ));
    }

    let record = db::attendance::insert(&mut tx, payload.member_id, time::now()).await?;
    tx.commit().await?;

    info!("Member {} checked in (attendance {})", record.member_id, record.id);
    Ok(Json(record.into()))
}

/// GET /attendance/:member_id
///
/// An empty history is reported as 404, unlike the member listing.
pub async fn list_attendance(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
) -> ApiResult<Json<Vec<AttendanceResponse>>> {
    let mut conn = state.db.acquire().await?;
    let records = db::attendance::list_for_member(&mut conn, member_id).await?;

    if records.is_empty() {
        return Err(ApiError::NotFound("No attendance records found".to_string()));
    }

    Ok(Json(records.into_iter().map(AttendanceResponse::from).collect()))
}

/// Build attendance routes
pub fn attendance_routes() -> Router<AppState> {
    Router::new()
        .route("/attendance/check-in", post(check_in))
        .route("/attendance/:member_id", get(list_attendance))
}
