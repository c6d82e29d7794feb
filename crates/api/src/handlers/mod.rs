//! Route handlers.

pub mod bags;

use axum::response::Redirect;

use crate::ApiError;

/// `GET /` — the bag list is the home page.
pub async fn index() -> Redirect {
    Redirect::to("/bags")
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Page not found.".to_owned())
}
