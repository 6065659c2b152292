//! Tests for the health endpoint and general HTTP behaviour.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get};
use testplan_db::store::MemoryStore;

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

#[tokio::test]
async fn health_check_reports_degraded_store() {
    let app = common::build_test_app(Arc::new(MemoryStore::unavailable()));
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], false);
}

#[tokio::test]
async fn health_check_is_not_mounted_under_api_v1() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));
    let response = get(app, "/api/v1/health").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}
