use vb_core::{Identity, RankedVoucher};

use serde::Serialize;

/// Unit label attached to every leaderboard entry
const SCORE_UNIT: &str = "vouches";

/// One leaderboard row with its resolved identity
#[derive(Debug, Serialize)]
pub struct LeaderboardEntryDto {
    pub user_id: String,
    pub display_name: String,
    pub avatar_url: String,
    pub vouch_count: u64,
    pub unit: &'static str,
}

impl LeaderboardEntryDto {
    pub fn from_ranked(ranked: RankedVoucher, identity: &Identity) -> Self {
        Self {
            user_id: ranked.user_id,
            display_name: identity.display_name.clone(),
            avatar_url: identity.avatar_url.clone(),
            vouch_count: ranked.vouch_count,
            unit: SCORE_UNIT,
        }
    }
}
