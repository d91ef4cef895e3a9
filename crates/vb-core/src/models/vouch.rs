use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted endorsement: who vouched, when, how many stars, and why.
///
/// Vouches are append-only. Once created they are never updated or
/// deleted; the full history is what the aggregation views are built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vouch {
    pub id: Uuid,

    /// Opaque external identifier of the rater. Resolved to a display
    /// identity on demand, never stored enriched.
    pub user_id: String,

    pub stars: i64,
    pub message: String,

    /// Assigned by the system at insertion, not supplied by the caller.
    pub created_at: DateTime<Utc>,
}

impl Vouch {
    pub fn new(user_id: String, stars: i64, message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            stars,
            message,
            created_at: Utc::now(),
        }
    }
}
