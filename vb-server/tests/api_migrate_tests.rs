//! Integration tests for the one-shot legacy import endpoint
mod common;

use crate::common::create_test_app_state;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use vb_server::build_router;

const LEGACY_LINES: &str = "UserID:42 | 2024-01-01 10:00:00 | Stars:5 | Message:\"great\"\n\
                            UserID:99 | 2024-01-02 11:30:00 | Stars:3 | Message:\"fine\"\n\
                            garbage line\n";

fn get_migrate_request() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/migrate")
        .body(Body::empty())
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_migrate_imports_legacy_file() {
    let temp = TempDir::new().unwrap();
    let state = create_test_app_state(&temp).await;
    std::fs::write(temp.path().join("vouches.txt"), LEGACY_LINES).unwrap();

    let app = build_router(state.clone());
    let response = app.oneshot(get_migrate_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["imported"], 2);
    assert_eq!(json["skipped"], 0);
}

#[tokio::test]
async fn test_migrate_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let state = create_test_app_state(&temp).await;
    std::fs::write(temp.path().join("vouches.txt"), LEGACY_LINES).unwrap();

    let app = build_router(state.clone());
    app.clone().oneshot(get_migrate_request()).await.unwrap();

    // Second run: everything already present
    let response = app.oneshot(get_migrate_request()).await.unwrap();
    let json = response_json(response).await;

    assert_eq!(json["imported"], 0);
    assert_eq!(json["skipped"], 2);
}

#[tokio::test]
async fn test_migrate_with_missing_file_reports_zero() {
    let temp = TempDir::new().unwrap();
    let state = create_test_app_state(&temp).await;

    let app = build_router(state);
    let response = app.oneshot(get_migrate_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["imported"], 0);
    assert_eq!(json["skipped"], 0);
}
