pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    migrate::{migrate::run_migrate, migrate_response::MigrateResponse},
    summary::{
        leaderboard_entry_dto::LeaderboardEntryDto, recent_vouch_dto::RecentVouchDto,
        summary::get_summary, summary_response::SummaryResponse, vouch_stats_dto::VouchStatsDto,
    },
    vouches::{create_vouch_request::CreateVouchRequest, vouches::create_vouch},
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
