//! Subscription persistence

use chrono::NaiveDate;
use mbrs_common::db::Subscription;
use sqlx::SqliteConnection;

pub async fn insert(
    conn: &mut SqliteConnection,
    member_id: i64,
    plan_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Subscription, sqlx::Error> {
    sqlx::query_as::<_, Subscription>(
        r#"
        INSERT INTO subscriptions (member_id, plan_id, start_date, end_date)
        VALUES (?, ?, ?, ?)
        RETURNING id, member_id, plan_id, start_date, end_date
        "#,
    )
    .bind(member_id)
    .bind(plan_id)
    .bind(start_date)
    .bind(end_date)
    .fetch_one(conn)
    .await
}

/// The member's earliest-created subscription whose `[start_date, end_date]`
/// contains `day` (inclusive on both ends), if any
pub async fn find_active(
    conn: &mut SqliteConnection,
    member_id: i64,
    day: NaiveDate,
) -> Result<Option<Subscription>, sqlx::Error> {
    sqlx::query_as::<_, Subscription>(
        r#"
        SELECT id, member_id, plan_id, start_date, end_date
        FROM subscriptions
        WHERE member_id = ? AND start_date <= ? AND end_date >= ?
        ORDER BY id
        LIMIT 1
        "#,
    )
    .bind(member_id)
    .bind(day)
    .bind(day)
    .fetch_optional(conn)
    .await
}
