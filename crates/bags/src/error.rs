//! Domain-level error types.

use thiserror::Error;

use db::DbError;

/// Errors produced by the bag store and by command parsing.
#[derive(Debug, Error)]
pub enum BagError {
    // ------ Lookup errors ------

    /// No bag with the requested id exists.
    #[error("bag {0} not found")]
    NotFound(i64),

    // ------ Input errors ------

    /// A required form field was absent or blank.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// A form field was present but could not be coerced.
    #[error("invalid value for '{field}': {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },

    /// Persistence error from the db crate.
    #[error("database error: {0}")]
    Database(#[from] DbError),
}

impl BagError {
    /// Map a db error raised while looking up bag `id`, turning a missing
    /// row into [`BagError::NotFound`].
    pub(crate) fn for_bag(id: i64, err: DbError) -> Self {
        match err {
            DbError::NotFound => Self::NotFound(id),
            other => Self::Database(other),
        }
    }

    /// `true` for errors caused by the caller's input rather than the store.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::MissingField(_) | Self::InvalidField { .. })
    }
}
