//! Club repository functions.
//!
//! Clubs are never addressed on their own; every query is scoped to the
//! owning bag.

use sqlx::SqlitePool;

use crate::{DbError, models::ClubRow};

/// Return the clubs of one bag in insertion order.
///
/// An unknown `bag_id` yields an empty list, not `NotFound`.
pub async fn list_clubs_for_bag(pool: &SqlitePool, bag_id: i64) -> Result<Vec<ClubRow>, DbError> {
    let rows = sqlx::query_as::<_, ClubRow>(
        r#"SELECT id, bag_id, name FROM clubs WHERE bag_id = ?1 ORDER BY id ASC"#,
    )
    .bind(bag_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Append a club to an existing bag.
///
/// The existence check and the insert are one statement, so no read lock is
/// held across a write and concurrent appends only wait on SQLite's busy
/// timeout.  The `clubs.bag_id` foreign key still rejects orphans.
///
/// Returns `DbError::NotFound` if the bag does not exist.
pub async fn insert_club(pool: &SqlitePool, bag_id: i64, name: &str) -> Result<ClubRow, DbError> {
    let row = sqlx::query_as::<_, ClubRow>(
        r#"
        INSERT INTO clubs (bag_id, name)
        SELECT ?1, ?2
        WHERE EXISTS (SELECT 1 FROM bags WHERE id = ?1)
        RETURNING id, bag_id, name
        "#,
    )
    .bind(bag_id)
    .bind(name)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound)?;

    Ok(row)
}
