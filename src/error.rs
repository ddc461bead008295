//! Error types for the Estante server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("Review API error: {0}")]
    Upstream(String),
}

impl IntoResponse for AppError {
    /// Errors are logged at the route boundary; clients get a bare
    /// status with an empty body.
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(what) => {
                tracing::debug!("Not found: {}", what);
                StatusCode::NOT_FOUND
            }
            AppError::Store(e) => {
                tracing::error!("Store error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Upstream(msg) => {
                tracing::error!("Review API error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        status.into_response()
    }
}
