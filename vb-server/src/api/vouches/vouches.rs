//! Vouch submission handler

use crate::{ApiResult, AppState, CreateVouchRequest};

use vb_core::Vouch;
use vb_db::VouchRepository;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// POST /api/vouches
///
/// Accept one vouch: validate, stamp with the current time, persist.
pub async fn create_vouch(
    State(state): State<AppState>,
    Json(request): Json<CreateVouchRequest>,
) -> ApiResult<impl IntoResponse> {
    let (user_id, stars, message) = request.into_validated(&state.validation)?;

    let vouch = Vouch::new(user_id, stars, message);

    let repo = VouchRepository::new(state.pool.clone());
    repo.create(&vouch).await?;

    log::info!("vouch recorded: user={} stars={}", vouch.user_id, vouch.stars);

    Ok((StatusCode::CREATED, Json(json!({ "success": true }))))
}
