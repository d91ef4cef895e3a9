//! Integration tests for the aggregated-view endpoint
mod common;

use crate::common::{
    create_test_app_state, create_test_app_state_with_directory, create_test_vouch,
};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vb_config::DirectoryConfig;
use vb_server::build_router;

fn get_summary_request() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_summary_empty_store() {
    let temp = TempDir::new().unwrap();
    let state = create_test_app_state(&temp).await;
    let app = build_router(state);

    let response = app.oneshot(get_summary_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["stats"]["total_vouches"], 0);
    assert_eq!(json["stats"]["average_rating"], 0.0);
    assert_eq!(json["recent"].as_array().unwrap().len(), 0);
    assert_eq!(json["leaderboard"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_summary_stats_and_leaderboard() {
    let temp = TempDir::new().unwrap();
    let state = create_test_app_state(&temp).await;

    // "heavy" vouches 5 times, "light" twice - 7 vouches, 31 stars
    for i in 0..5 {
        create_test_vouch(&state.pool, "heavy", 5, "again", 1000 + i).await;
    }
    create_test_vouch(&state.pool, "light", 3, "ok", 2000).await;
    create_test_vouch(&state.pool, "light", 3, "ok", 2001).await;

    let app = build_router(state);
    let response = app.oneshot(get_summary_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["stats"]["total_vouches"], 7);
    // 31 / 7 = 4.4285... -> 4.43
    assert_eq!(json["stats"]["average_rating"], 4.43);

    let leaderboard = json["leaderboard"].as_array().unwrap();
    assert_eq!(leaderboard.len(), 2);
    assert_eq!(leaderboard[0]["user_id"], "heavy");
    assert_eq!(leaderboard[0]["vouch_count"], 5);
    assert_eq!(leaderboard[0]["unit"], "vouches");
    assert_eq!(leaderboard[1]["user_id"], "light");
    assert_eq!(leaderboard[1]["vouch_count"], 2);
}

#[tokio::test]
async fn test_summary_leaderboard_truncated_to_three() {
    let temp = TempDir::new().unwrap();
    let state = create_test_app_state(&temp).await;

    for (i, user) in ["a", "b", "c", "d"].iter().enumerate() {
        create_test_vouch(&state.pool, user, 4, "hi", 1000 + i as i64).await;
    }

    let app = build_router(state);
    let response = app.oneshot(get_summary_request()).await.unwrap();

    let json = response_json(response).await;
    assert_eq!(json["leaderboard"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_summary_recent_is_newest_first_with_synthetic_identity() {
    let temp = TempDir::new().unwrap();
    let state = create_test_app_state(&temp).await;

    create_test_vouch(&state.pool, "abcdef123", 5, "first", 1_704_103_200).await;
    create_test_vouch(&state.pool, "abcdef123", 4, "second", 1_704_189_600).await;

    let app = build_router(state);
    let response = app.oneshot(get_summary_request()).await.unwrap();

    let json = response_json(response).await;
    let recent = json["recent"].as_array().unwrap();

    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0]["message"], "second");
    assert_eq!(recent[1]["message"], "first");
    assert_eq!(recent[1]["timestamp"], "2024-01-01 10:00:00");

    // No directory credential configured: synthetic identity
    assert_eq!(recent[0]["display_name"], "User abcdef");
    assert_eq!(
        recent[0]["avatar_url"],
        "https://cdn.discordapp.com/embed/avatars/0.png"
    );
}

#[tokio::test]
async fn test_summary_enriches_from_directory() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/123456789"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "123456789",
            "username": "raven",
            "global_name": "Raven",
            "avatar": "deadbeef"
        })))
        .expect(1) // one distinct rater -> one lookup despite two vouches
        .mount(&mock_server)
        .await;

    let temp = TempDir::new().unwrap();
    let directory = DirectoryConfig {
        api_base: mock_server.uri(),
        bot_token: Some("test-token".to_string()),
        ..DirectoryConfig::default()
    };
    let state = create_test_app_state_with_directory(&temp, directory).await;

    create_test_vouch(&state.pool, "123456789", 5, "nice", 1000).await;
    create_test_vouch(&state.pool, "123456789", 4, "still nice", 2000).await;

    let app = build_router(state);
    let response = app.oneshot(get_summary_request()).await.unwrap();

    let json = response_json(response).await;
    assert_eq!(json["recent"][0]["display_name"], "Raven");
    assert_eq!(
        json["recent"][0]["avatar_url"],
        "https://cdn.discordapp.com/avatars/123456789/deadbeef.png"
    );
    assert_eq!(json["leaderboard"][0]["display_name"], "Raven");
}
