//! Typed error type for the db crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// The addressed bag does not exist.  Callers that know which id they
    /// asked for turn this into a richer error.
    #[error("no matching row")]
    NotFound,

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
