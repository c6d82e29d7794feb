//! Handler error type and its HTML response mapping.

use axum::{
    extract::rejection::{FormRejection, PathRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use bags::BagError;

use crate::views;

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 404 — unknown bag or route.
    #[error("{0}")]
    NotFound(String),

    /// 400 — missing or malformed path segment or form field.
    #[error("{0}")]
    BadRequest(String),

    /// 500 — store failure.  The message is logged, never rendered.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BagError> for ApiError {
    fn from(err: BagError) -> Self {
        match err {
            BagError::NotFound(id) => Self::NotFound(format!("No bag with id {id}.")),
            e if e.is_input_error() => Self::BadRequest(e.to_string()),
            e => Self::Internal(e.to_string()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Internal(detail) => {
                tracing::error!("Server error: {detail}");
                "Something went wrong.".to_owned()
            }
            Self::NotFound(msg) | Self::BadRequest(msg) => {
                tracing::warn!("Client error ({}): {msg}", status.as_u16());
                msg.clone()
            }
        };

        (status, Html(views::error_page(status, &message))).into_response()
    }
}
