//! Shared API request/response types
//!
//! These are the wire shapes of every operation. They are deliberately kept
//! separate from the row models in [`crate::db::models`] so storage columns
//! can change without changing the JSON contract.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::db::models::{self, DEFAULT_MEMBER_STATUS};

// ========================================
// Members
// ========================================

/// Body of `POST /members/`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateMemberRequest {
    pub name: String,
    pub phone: String,
    /// Omitted or `null` means "active"
    #[serde(default)]
    pub status: Option<String>,
}

impl CreateMemberRequest {
    /// Status to persist, falling back to the default
    pub fn status_or_default(&self) -> &str {
        self.status.as_deref().unwrap_or(DEFAULT_MEMBER_STATUS)
    }
}

/// Query string of `GET /members/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberListQuery {
    #[serde(default)]
    pub status: Option<String>,
}

impl MemberListQuery {
    /// The status filter to apply; an empty value means no filter
    pub fn status_filter(&self) -> Option<&str> {
        self.status.as_deref().filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MemberResponse {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub status: String,
    pub total_check_ins: i64,
}

impl From<models::Member> for MemberResponse {
    fn from(member: models::Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            phone: member.phone,
            status: member.status,
            total_check_ins: member.total_check_ins,
        }
    }
}

// ========================================
// Plans
// ========================================

/// Body of `POST /plans/`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreatePlanRequest {
    pub name: String,
    pub price: i64,
    pub duration_days: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlanResponse {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub duration_days: i64,
}

impl From<models::Plan> for PlanResponse {
    fn from(plan: models::Plan) -> Self {
        Self {
            id: plan.id,
            name: plan.name,
            price: plan.price,
            duration_days: plan.duration_days,
        }
    }
}

// ========================================
// Subscriptions
// ========================================

/// Body of `POST /subscriptions/`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateSubscriptionRequest {
    pub member_id: i64,
    pub plan_id: i64,
    /// Calendar date, `YYYY-MM-DD`
    pub start_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubscriptionResponse {
    pub id: i64,
    pub member_id: i64,
    pub plan_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<models::Subscription> for SubscriptionResponse {
    fn from(sub: models::Subscription) -> Self {
        Self {
            id: sub.id,
            member_id: sub.member_id,
            plan_id: sub.plan_id,
            start_date: sub.start_date,
            end_date: sub.end_date,
        }
    }
}

// ========================================
// Attendance
// ========================================

/// Body of `POST /attendance/check-in`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckInRequest {
    pub member_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AttendanceResponse {
    pub id: i64,
    pub member_id: i64,
    /// RFC 3339, UTC
    pub check_in_time: DateTime<Utc>,
}

impl From<models::Attendance> for AttendanceResponse {
    fn from(record: models::Attendance) -> Self {
        Self {
            id: record.id,
            member_id: record.member_id,
            check_in_time: record.check_in_time,
        }
    }
}
