//! SQLite connection pool.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::DbError;

/// Type alias for the shared SQLite pool used across the whole application.
pub type DbPool = SqlitePool;

/// Create a new connection pool from the given `database_url`.
///
/// `max_connections` controls the pool ceiling.  The database file is created
/// if it does not exist and foreign keys are enforced on every connection.
///
/// Connections are never recycled, so a `sqlite::memory:` pool with
/// `max_connections == 1` keeps its data for the lifetime of the pool.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, DbError> {
    info!("Connecting to database (max_connections={})", max_connections);
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Create the `bags` and `clubs` tables (and the `clubs.bag_id` cascade) by
/// applying the migrations embedded from the workspace `migrations/` folder.
///
/// Already-applied migrations are skipped, so this is safe on every start.
pub async fn run_migrations(pool: &DbPool) -> Result<(), DbError> {
    info!("Applying bags/clubs schema migrations");
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}
