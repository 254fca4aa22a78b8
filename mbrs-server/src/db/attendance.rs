//! Attendance persistence

use chrono::{DateTime, Utc};
use mbrs_common::db::Attendance;
use sqlx::SqliteConnection;

pub async fn insert(
    conn: &mut SqliteConnection,
    member_id: i64,
    check_in_time: DateTime<Utc>,
) -> Result<Attendance, sqlx::Error> {
    sqlx::query_as::<_, Attendance>(
        r#"
        INSERT INTO attendance (member_id, check_in_time)
        VALUES (?, ?)
        RETURNING id, member_id, check_in_time
        "#,
    )
    .bind(member_id)
    .bind(check_in_time)
    .fetch_one(conn)
    .await
}

/// All check-ins for a member in insertion order
pub async fn list_for_member(
    conn: &mut SqliteConnection,
    member_id: i64,
) -> Result<Vec<Attendance>, sqlx::Error> {
    sqlx::query_as::<_, Attendance>(
        "SELECT id, member_id, check_in_time FROM attendance WHERE member_id = ? ORDER BY id",
    )
    .bind(member_id)
    .fetch_all(conn)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::members;
    use chrono::TimeZone;
    use mbrs_common::db::init_memory_database;

    #[tokio::test]
    async fn test_check_in_time_round_trips() {
        let pool = init_memory_database().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();
        let member = members::insert(&mut conn, "A", "1", "active").await.unwrap();

        let at = Utc.with_ymd_and_hms(2025, 6, 1, 7, 30, 0).unwrap();
        let record = insert(&mut conn, member.id, at).await.unwrap();
        assert_eq!(record.check_in_time, at);

        let later = Utc.with_ymd_and_hms(2025, 6, 2, 18, 0, 0).unwrap();
        insert(&mut conn, member.id, later).await.unwrap();

        let records = list_for_member(&mut conn, member.id).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], record);
        assert_eq!(records[1].check_in_time, later);
    }

    #[tokio::test]
    async fn test_list_for_other_member_is_empty() {
        let pool = init_memory_database().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();
        let member = members::insert(&mut conn, "A", "1", "active").await.unwrap();
        insert(&mut conn, member.id, Utc::now()).await.unwrap();

        assert!(list_for_member(&mut conn, member.id + 1).await.unwrap().is_empty());
    }
}
