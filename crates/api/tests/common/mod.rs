#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use shelter_core::clock::FixedClock;
use shelter_core::types::Timestamp;
use sqlx::PgPool;
use tower::ServiceExt;

use shelter_api::app::build_app;
use shelter_api::config::{RecordOperations, ServerConfig};
use shelter_api::state::AppState;

/// The instant every record created through the test app is stamped with.
pub fn fixed_now() -> Timestamp {
    Utc.with_ymd_and_hms(2022, 6, 10, 20, 18, 42).unwrap()
}

/// Build a test `ServerConfig` with safe defaults and the given operations.
pub fn test_config(operations: RecordOperations) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_max_connections: 5,
        operations,
    }
}

/// Build the full application router with every operation enabled on every
/// kind, using the given database pool and a fixed clock.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, RecordOperations::all())
}

/// Build the application router with a specific operation configuration.
pub fn build_test_app_with(pool: PgPool, operations: RecordOperations) -> Router {
    build_app(AppState {
        pool,
        config: Arc::new(test_config(operations)),
        clock: Arc::new(FixedClock(fixed_now())),
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

/// Send a raw body with a JSON content type (for malformed-payload tests).
pub async fn send_raw(app: Router, method: Method, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
