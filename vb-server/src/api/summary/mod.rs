pub mod leaderboard_entry_dto;
pub mod recent_vouch_dto;
pub mod summary;
pub mod summary_response;
pub mod vouch_stats_dto;
