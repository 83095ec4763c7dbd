//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! formatter for the actual work.

use axum::{body::Bytes, Json};
use tracing::debug;

use super::dto::{CitationRequest, CitationResponse, HealthResponse, StyleListResponse};
use super::error::AppError;
use crate::formatter;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// /api/health
///
/// Liveness probe. Answers every verb; OPTIONS is handled by the CORS layer.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

// =============================================================================
// Citations
// =============================================================================

/// POST /api/generate-citation
///
/// The body is decoded by hand rather than with the `Json` extractor so that
/// every decoding failure, including a missing content type, maps to 400.
pub async fn generate_citation(body: Bytes) -> HandlerResult<CitationResponse> {
    let request: CitationRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(category = ?e.classify(), "rejecting citation request body");
        AppError::from(e)
    })?;

    let citation = formatter::generate_citation(&request.style, &request.data);

    Ok(Json(CitationResponse {
        citation,
        style: request.style.into(),
    }))
}

/// Fallback for verbs the citation endpoint does not accept.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// GET /api/styles
pub async fn list_styles() -> Json<StyleListResponse> {
    Json(StyleListResponse {
        styles: formatter::style_catalog(),
    })
}
