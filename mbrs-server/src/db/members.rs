//! Member persistence

use mbrs_common::db::Member;
use sqlx::SqliteConnection;

/// Insert a member with zero check-ins
pub async fn insert(
    conn: &mut SqliteConnection,
    name: &str,
    phone: &str,
    status: &str,
) -> Result<Member, sqlx::Error> {
    sqlx::query_as::<_, Member>(
        r#"
        INSERT INTO members (name, phone, status, total_check_ins)
        VALUES (?, ?, ?, 0)
        RETURNING id, name, phone, status, total_check_ins
        "#,
    )
    .bind(name)
    .bind(phone)
    .bind(status)
    .fetch_one(conn)
    .await
}

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<Member>, sqlx::Error> {
    sqlx::query_as::<_, Member>(
        "SELECT id, name, phone, status, total_check_ins FROM members WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(conn)
    .await
}

pub async fn find_by_phone(
    conn: &mut SqliteConnection,
    phone: &str,
) -> Result<Option<Member>, sqlx::Error> {
    sqlx::query_as::<_, Member>(
        "SELECT id, name, phone, status, total_check_ins FROM members WHERE phone = ?",
    )
    .bind(phone)
    .fetch_optional(conn)
    .await
}

/// All members in insertion order, optionally restricted to an exact status
pub async fn list(
    conn: &mut SqliteConnection,
    status: Option<&str>,
) -> Result<Vec<Member>, sqlx::Error> {
    match status {
        Some(status) => {
            sqlx::query_as::<_, Member>(
                "SELECT id, name, phone, status, total_check_ins FROM members WHERE status = ? ORDER BY id",
            )
            .bind(status)
            .fetch_all(conn)
            .await
        }
        None => {
            sqlx::query_as::<_, Member>(
                "SELECT id, name, phone, status, total_check_ins FROM members ORDER BY id",
            )
            .fetch_all(conn)
            .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mbrs_common::db::init_memory_database;

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let pool = init_memory_database().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();

        let member = insert(&mut conn, "Ada", "555-0100", "active").await.unwrap();
        assert_eq!(member.total_check_ins, 0);

        let by_id = find_by_id(&mut conn, member.id).await.unwrap();
        assert_eq!(by_id.as_ref(), Some(&member));

        let by_phone = find_by_phone(&mut conn, "555-0100").await.unwrap();
        assert_eq!(by_phone, Some(member));

        assert!(find_by_phone(&mut conn, "555-0199").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_filters_by_exact_status() {
        let pool = init_memory_database().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();

        insert(&mut conn, "A", "1", "active").await.unwrap();
        insert(&mut conn, "B", "2", "paused").await.unwrap();
        insert(&mut conn, "C", "3", "Active").await.unwrap();

        assert_eq!(list(&mut conn, None).await.unwrap().len(), 3);

        let active = list(&mut conn, Some("active")).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "A");

        assert!(list(&mut conn, Some("expired")).await.unwrap().is_empty());
    }
}
