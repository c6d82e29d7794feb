//! Golf bag CRUD operations.

use sqlx::SqlitePool;

use crate::{DbError, models::BagRow};

/// Insert a new bag and return the stored row with its generated id.
pub async fn insert_bag(
    pool: &SqlitePool,
    player: &str,
    capacity: u32,
) -> Result<BagRow, DbError> {
    let row = sqlx::query_as::<_, BagRow>(
        r#"
        INSERT INTO bags (player, capacity)
        VALUES (?1, ?2)
        RETURNING id, player, capacity
        "#,
    )
    .bind(player)
    .bind(capacity)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Fetch a single bag by its primary key.
pub async fn get_bag(pool: &SqlitePool, id: i64) -> Result<BagRow, DbError> {
    let row = sqlx::query_as::<_, BagRow>(
        r#"SELECT id, player, capacity FROM bags WHERE id = ?1"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound)?;

    Ok(row)
}

/// Return all bags ordered by id (oldest first).
pub async fn list_bags(pool: &SqlitePool) -> Result<Vec<BagRow>, DbError> {
    let rows = sqlx::query_as::<_, BagRow>(
        r#"SELECT id, player, capacity FROM bags ORDER BY id ASC"#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Permanently delete a bag by its primary key.
///
/// The `clubs.bag_id` foreign key cascades, so the bag's clubs disappear in
/// the same statement.
///
/// Returns `DbError::NotFound` if no row was deleted.
pub async fn delete_bag(pool: &SqlitePool, id: i64) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM bags WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }

    Ok(())
}
