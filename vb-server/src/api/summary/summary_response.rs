use crate::{LeaderboardEntryDto, RecentVouchDto, VouchStatsDto};

use serde::Serialize;

/// Aggregated view response: stats, recent activity, leaderboard
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub stats: VouchStatsDto,
    pub recent: Vec<RecentVouchDto>,
    pub leaderboard: Vec<LeaderboardEntryDto>,
}
