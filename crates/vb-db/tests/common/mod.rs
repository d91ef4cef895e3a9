#![allow(dead_code)]

use vb_core::Vouch;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// A vouch with a fixed timestamp so ordering and dedupe are deterministic
pub fn create_test_vouch(user_id: &str, stars: i64, at: DateTime<Utc>) -> Vouch {
    Vouch {
        id: Uuid::new_v4(),
        user_id: user_id.to_string(),
        stars,
        message: format!("{stars} stars from {user_id}"),
        created_at: at,
    }
}

pub fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}
