use crate::state::AppState;
use crate::{api, health};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Aggregated view
        .route("/", get(api::summary::summary::get_summary))
        // Vouch submission
        .route("/api/vouches", post(api::vouches::vouches::create_vouch))
        // One-shot legacy import
        .route("/migrate", get(api::migrate::migrate::run_migrate))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
