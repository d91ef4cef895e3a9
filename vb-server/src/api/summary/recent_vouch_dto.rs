use vb_core::{Identity, Vouch};

use serde::Serialize;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One enriched recent-activity entry
#[derive(Debug, Serialize)]
pub struct RecentVouchDto {
    pub user_id: String,
    /// Human-readable UTC rendering, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
    pub stars: i64,
    pub message: String,
    pub display_name: String,
    pub avatar_url: String,
}

impl RecentVouchDto {
    pub fn from_vouch(vouch: &Vouch, identity: &Identity) -> Self {
        Self {
            user_id: vouch.user_id.clone(),
            timestamp: vouch.created_at.format(TIMESTAMP_FORMAT).to_string(),
            stars: vouch.stars,
            message: vouch.message.clone(),
            display_name: identity.display_name.clone(),
            avatar_url: identity.avatar_url.clone(),
        }
    }
}
