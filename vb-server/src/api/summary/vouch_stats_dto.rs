use vb_core::VouchStats;

use serde::Serialize;

/// Summary statistics for JSON serialization
#[derive(Debug, Serialize)]
pub struct VouchStatsDto {
    pub total_vouches: usize,
    pub average_rating: f64,
}

impl From<VouchStats> for VouchStatsDto {
    fn from(s: VouchStats) -> Self {
        Self {
            total_vouches: s.total_vouches,
            average_rating: s.average_rating,
        }
    }
}
