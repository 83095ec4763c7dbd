//! HTTP-level contract tests for the citation API.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`, so no
//! socket is bound.

#![cfg(feature = "http-server")]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use cytewise::http::create_router;
use cytewise::http::router::{ALLOWED_HEADERS, ALLOWED_METHODS};

async fn send(method: Method, uri: &str, body: Body) -> Response {
    create_router()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(body)
                .expect("request"),
        )
        .await
        .expect("router is infallible")
}

async fn post_json(uri: &str, body: Value) -> Response {
    create_router()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("router is infallible")
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("json body")
}

fn assert_cors(response: &Response) {
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], ALLOWED_METHODS);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], ALLOWED_HEADERS);
}

// =========================================================
// POST /api/generate-citation
// =========================================================

#[tokio::test]
async fn test_generate_apa_citation() {
    let response = post_json(
        "/api/generate-citation",
        json!({
            "style": "APA",
            "data": {"author": "Smith, J.", "title": "On Widgets", "year": "2020"}
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(
        body_json(response).await,
        json!({"citation": "Smith, J. (2020). On Widgets.", "style": "APA"})
    );
}

#[tokio::test]
async fn test_generate_mla_citation_without_access_date() {
    let response = post_json(
        "/api/generate-citation",
        json!({
            "style": "MLA",
            "data": {"author": "Doe, J.", "title": "A Study", "url": "http://example.com"}
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let citation = body["citation"].as_str().unwrap();
    assert!(citation.ends_with("Web. Date. <http://example.com>."));
    assert_eq!(body["style"], "MLA");
}

#[tokio::test]
async fn test_empty_record_yields_empty_citation() {
    let response = post_json(
        "/api/generate-citation",
        json!({"style": "APA", "data": {}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["citation"], "");
}

#[tokio::test]
async fn test_unimplemented_style_returns_placeholder() {
    let response = post_json(
        "/api/generate-citation",
        json!({"style": "Harvard", "data": {"author": "Smith, J."}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"citation": "Citation format coming soon...", "style": "Harvard"})
    );
}

#[tokio::test]
async fn test_unknown_style_is_echoed_back() {
    let response = post_json(
        "/api/generate-citation",
        json!({"style": "Nature", "data": {}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"citation": "Citation format coming soon...", "style": "Nature"})
    );
}

#[tokio::test]
async fn test_body_without_content_type_is_accepted() {
    let body = json!({"style": "APA", "data": {"title": "Widgets"}}).to_string();
    let response = send(Method::POST, "/api/generate-citation", Body::from(body)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["citation"], "Widgets.");
}

#[tokio::test]
async fn test_null_fields_are_treated_as_empty() {
    let response = post_json(
        "/api/generate-citation",
        json!({"style": "APA", "data": {"author": "Smith", "doi": null}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["citation"], "Smith");
}

#[tokio::test]
async fn test_null_style_and_data_are_accepted() {
    let response = post_json(
        "/api/generate-citation",
        json!({"style": null, "data": null}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"citation": "Citation format coming soon...", "style": ""})
    );
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let response = send(
        Method::POST,
        "/api/generate-citation",
        Body::from("{\"style\": \"APA\", \"data\": "),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_cors(&response);
    assert_eq!(body_bytes(response).await, b"Invalid JSON");
}

#[tokio::test]
async fn test_wrong_field_type_is_bad_request() {
    let response = post_json(
        "/api/generate-citation",
        json!({"style": "APA", "data": {"year": 2020}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_body_is_bad_request() {
    let response = send(Method::POST, "/api/generate-citation", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_on_citation_endpoint_is_not_allowed() {
    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let response = send(method.clone(), "/api/generate-citation", Body::empty()).await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
        assert_cors(&response);
        assert_eq!(body_bytes(response).await, b"Method not allowed");
    }
}

// =========================================================
// Preflight
// =========================================================

#[tokio::test]
async fn test_options_preflight_short_circuits() {
    let response = send(Method::OPTIONS, "/api/generate-citation", Body::empty()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_options_with_origin_on_health() {
    let response = create_router()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/health")
                .header(header::ORIGIN, "https://app.example.org")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    assert!(body_bytes(response).await.is_empty());
}

// =========================================================
// Health and catalog
// =========================================================

#[tokio::test]
async fn test_health_check() {
    let response = send(Method::GET, "/api/health", Body::empty()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    assert_eq!(body_json(response).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_health_check_answers_any_verb() {
    for method in [Method::POST, Method::PUT, Method::DELETE] {
        let response = send(method.clone(), "/api/health", Body::empty()).await;

        assert_eq!(response.status(), StatusCode::OK, "{method}");
        assert_cors(&response);
        assert_eq!(body_json(response).await, json!({"status": "ok"}));
    }
}

#[tokio::test]
async fn test_list_styles() {
    let response = send(Method::GET, "/api/styles", Body::empty()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let styles = body["styles"].as_array().unwrap();
    assert_eq!(styles.len(), 10);
    assert_eq!(styles[0], json!({"name": "APA", "implemented": true}));
    assert_eq!(styles[1], json!({"name": "MLA", "implemented": true}));
    assert!(styles[2..]
        .iter()
        .all(|style| style["implemented"] == json!(false)));
}

#[tokio::test]
async fn test_unknown_path_is_not_found_with_cors() {
    let response = send(Method::GET, "/api/nope", Body::empty()).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_cors(&response);
}
