//! Legacy file-store import handler

use crate::{ApiResult, AppState, MigrateResponse};

use vb_db::{VouchRepository, import_file_store};

use axum::{Json, extract::State};

/// GET /migrate
///
/// One-shot idempotent copy of the legacy line-oriented file into the
/// vouches table. Safe to call repeatedly: already-imported records are
/// skipped on the `(user_id, created_at, stars)` key.
pub async fn run_migrate(State(state): State<AppState>) -> ApiResult<Json<MigrateResponse>> {
    let repo = VouchRepository::new(state.pool.clone());

    let report = import_file_store(&state.file_store, &repo).await?;

    Ok(Json(report.into()))
}
