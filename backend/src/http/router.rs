//! Router configuration for the HTTP API.
//!
//! This module sets up all routes and middleware (CORS, tracing) and creates
//! the axum router ready for serving.

use axum::{
    http::{header, HeaderValue, StatusCode},
    routing::{any, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use super::handlers;

/// Value of `Access-Control-Allow-Methods` on every response.
pub const ALLOWED_METHODS: &str = "POST, GET, OPTIONS, PUT, DELETE";

/// Value of `Access-Control-Allow-Headers` on every response.
pub const ALLOWED_HEADERS: &str =
    "Accept, Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, Authorization";

/// Create the main application router with all routes and middleware.
pub fn create_router() -> Router {
    // Answers every OPTIONS request with an empty 200 and sets the wildcard
    // origin. Methods and headers are pinned below so that they appear on all
    // responses, not only on preflights.
    let cors = CorsLayer::new().allow_origin(Any);

    let api = Router::new()
        .route(
            "/generate-citation",
            post(handlers::generate_citation).fallback(handlers::method_not_allowed),
        )
        .route("/health", any(handlers::health_check))
        .route("/styles", get(handlers::list_styles));

    Router::new()
        .nest("/api", api)
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 page not found") })
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
}
