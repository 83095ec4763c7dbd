//! HTTP error handling.
//!
//! Errors are reported as plain text; the citation endpoint never returns a
//! JSON error body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application error type for HTTP handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request body could not be decoded into a citation request.
    #[error("Invalid JSON")]
    InvalidJson(#[from] serde_json::Error),

    /// The endpoint exists but does not accept this verb.
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
