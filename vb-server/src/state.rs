use vb_config::ValidationConfig;
use vb_db::FileStore;
use vb_directory::IdentityResolver;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared per-request state.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Process-wide resolver; its identity cache lives as long as the server.
    pub resolver: Arc<IdentityResolver>,
    pub validation: ValidationConfig,
    /// Legacy line-oriented store, read by the one-shot /migrate import.
    pub file_store: FileStore,
}
