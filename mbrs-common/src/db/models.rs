//! Database models
//!
//! One struct per table row. Relationships are plain foreign-key fields;
//! reverse lookups (a member's subscriptions or attendance) are queries by
//! `member_id`, never object references.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Status assigned to members created without one
pub const DEFAULT_MEMBER_STATUS: &str = "active";

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub status: String,
    /// Declared by the schema, initialized to 0; no operation increments it
    pub total_check_ins: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Plan {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub duration_days: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Subscription {
    pub id: i64,
    pub member_id: i64,
    pub plan_id: i64,
    pub start_date: NaiveDate,
    /// Fixed at creation from the plan's duration at that time
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Attendance {
    pub id: i64,
    pub member_id: i64,
    pub check_in_time: DateTime<Utc>,
}

