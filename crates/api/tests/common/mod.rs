#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use testplan_api::config::{LogFormat, ServerConfig};
use testplan_api::router::build_app_router;
use testplan_api::state::AppState;
use testplan_db::store::MemoryStore;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_max_connections: 1,
        log_format: LogFormat::Text,
    }
}

/// Build the full application router, with the same middleware stack as
/// production, backed by the given in-memory store.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    let state = AppState { store };
    build_app_router(state, &test_config())
}

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

pub async fn post_raw(app: Router, uri: &str, raw: &'static str) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(raw)).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Body::from(json.to_string())).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
