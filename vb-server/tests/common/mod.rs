#![allow(dead_code)]

//! Test infrastructure for vb-server API tests

use vb_config::{DirectoryConfig, ValidationConfig};
use vb_db::FileStore;
use vb_directory::IdentityResolver;
use vb_server::AppState;

use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/vb-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing; no directory credential, so every identity
/// is synthetic and no network calls happen.
pub async fn create_test_app_state(temp: &TempDir) -> AppState {
    create_test_app_state_with_directory(temp, DirectoryConfig::default()).await
}

/// Create AppState with an explicit directory config (wiremock tests)
pub async fn create_test_app_state_with_directory(
    temp: &TempDir,
    directory: DirectoryConfig,
) -> AppState {
    let pool = create_test_pool().await;
    let resolver = IdentityResolver::new(&directory).expect("Failed to build resolver");

    AppState {
        pool,
        resolver: Arc::new(resolver),
        validation: ValidationConfig::default(),
        file_store: FileStore::new(temp.path().join("vouches.txt")),
    }
}

/// Insert a vouch directly, bypassing the API
pub async fn create_test_vouch(
    pool: &SqlitePool,
    user_id: &str,
    stars: i64,
    message: &str,
    created_at: i64,
) {
    sqlx::query(
        "INSERT INTO vouches (id, user_id, stars, message, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(uuid::Uuid::new_v4().to_string())
    .bind(user_id)
    .bind(stars)
    .bind(message)
    .bind(created_at)
    .execute(pool)
    .await
    .expect("Failed to create test vouch");
}
