//! Aggregated-view handler: stats, recent activity, leaderboard.

use crate::{ApiResult, AppState, LeaderboardEntryDto, RecentVouchDto, SummaryResponse};

use vb_core::{Identity, LEADERBOARD_SIZE, rank_vouchers, vouch_stats};
use vb_db::VouchRepository;

use std::collections::HashMap;

use axum::{Json, extract::State};

/// GET /
///
/// Read the full vouch history, aggregate it, and enrich every distinct
/// rater with a resolved identity. An empty store renders zero stats and
/// empty lists, never an error.
pub async fn get_summary(State(state): State<AppState>) -> ApiResult<Json<SummaryResponse>> {
    let repo = VouchRepository::new(state.pool.clone());
    let vouches = repo.find_all().await?;

    let stats = vouch_stats(&vouches);
    let ranked = rank_vouchers(&vouches, LEADERBOARD_SIZE);

    // One resolve per distinct rater; the resolver caches across requests.
    let mut identities: HashMap<&str, Identity> = HashMap::new();
    for vouch in &vouches {
        if !identities.contains_key(vouch.user_id.as_str()) {
            let identity = state.resolver.resolve(&vouch.user_id).await;
            identities.insert(vouch.user_id.as_str(), identity);
        }
    }

    // The store returns oldest first; present newest first, untruncated.
    let recent: Vec<RecentVouchDto> = vouches
        .iter()
        .rev()
        .map(|v| RecentVouchDto::from_vouch(v, &identities[v.user_id.as_str()]))
        .collect();

    let leaderboard: Vec<LeaderboardEntryDto> = ranked
        .into_iter()
        .map(|r| {
            let identity = &identities[r.user_id.as_str()];
            LeaderboardEntryDto::from_ranked(r, identity)
        })
        .collect();

    Ok(Json(SummaryResponse {
        stats: stats.into(),
        recent,
        leaderboard,
    }))
}
