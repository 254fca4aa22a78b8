//! Member endpoints
//!
//! - `POST /members/`: register a member, unique by phone
//! - `GET /members/?status=`: list members, optionally by exact status

use axum::{extract::State, routing::get, Router};
use mbrs_common::api::{CreateMemberRequest, MemberListQuery, MemberResponse};
use tracing::{debug, info};

use super::extract::{Json, Query};
use crate::error::is_unique_violation;
use crate::{db, ApiError, ApiResult, AppState};

const DUPLICATE_PHONE: &str = "Phone number already exists";

/// POST /members/
///
/// **Errors:**
/// - 400 `CONFLICT`: phone already registered
pub async fn create_member(
    State(state): State<AppState>,
    Json(payload): Json<CreateMemberRequest>,
) -> ApiResult<Json<MemberResponse>> {
    let mut tx = db::begin_write(&state.db).await?;

    if db::members::find_by_phone(&mut tx, &payload.phone).await?.is_some() {
        debug!("Rejected member with duplicate phone {}", payload.phone);
        return Err(ApiError::Conflict(DUPLICATE_PHONE.to_string()));
    }

    // The write lock serializes this service's writers; the UNIQUE
    // constraint still covers any other process writing the file
    let member = db::members::insert(
        &mut tx,
        &payload.name,
        &payload.phone,
        payload.status_or_default(),
    )
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            ApiError::Conflict(DUPLICATE_PHONE.to_string())
        } else {
            ApiError::Database(e)
        }
    })?;

    tx.commit().await?;

    info!("Created member {} ({})", member.id, member.name);
    Ok(Json(member.into()))
}

/// GET /members/
///
/// An unmatched filter yields an empty list.
pub async fn list_members(
    State(state): State<AppState>,
    Query(query): Query<MemberListQuery>,
) -> ApiResult<Json<Vec<MemberResponse>>> {
    let mut conn = state.db.acquire().await?;
    let members = db::members::list(&mut conn, query.status_filter()).await?;
    Ok(Json(members.into_iter().map(MemberResponse::from).collect()))
}

/// Build member routes (with and without trailing slash)
pub fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/members/", get(list_members).post(create_member))
        .route("/members", get(list_members).post(create_member))
}
