//! Plan persistence

use mbrs_common::db::Plan;
use sqlx::SqliteConnection;

pub async fn insert(
    conn: &mut SqliteConnection,
    name: &str,
    price: i64,
    duration_days: i64,
) -> Result<Plan, sqlx::Error> {
    sqlx::query_as::<_, Plan>(
        r#"
        INSERT INTO plans (name, price, duration_days)
        VALUES (?, ?, ?)
        RETURNING id, name, price, duration_days
        "#,
    )
    .bind(name)
    .bind(price)
    .bind(duration_days)
    .fetch_one(conn)
    .await
}

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<Plan>, sqlx::Error> {
    sqlx::query_as::<_, Plan>("SELECT id, name, price, duration_days FROM plans WHERE id = ?")
        .bind(id)
        .fetch_optional(conn)
        .await
}

pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Plan>, sqlx::Error> {
    sqlx::query_as::<_, Plan>("SELECT id, name, price, duration_days FROM plans ORDER BY id")
        .fetch_all(conn)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use mbrs_common::db::init_memory_database;

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let pool = init_memory_database().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();

        let monthly = insert(&mut conn, "Monthly", 500, 30).await.unwrap();
        let yearly = insert(&mut conn, "Yearly", 5000, 365).await.unwrap();
        assert!(yearly.id > monthly.id);

        let plans = list(&mut conn).await.unwrap();
        assert_eq!(plans, vec![monthly.clone(), yearly]);
        assert_eq!(find_by_id(&mut conn, monthly.id).await.unwrap(), Some(monthly));
    }
}
