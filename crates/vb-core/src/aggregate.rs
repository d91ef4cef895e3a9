//! Pure aggregation over the stored vouch sequence.
//!
//! Callers hand in the full history in insertion order; everything here is
//! deterministic and does no I/O. Enrichment with display identities and
//! any reordering/truncation for presentation happen at the boundary.

use crate::Vouch;

use std::collections::HashMap;

/// Leaderboard length after truncation.
pub const LEADERBOARD_SIZE: usize = 3;

/// Summary statistics over the whole vouch history.
#[derive(Debug, Clone, PartialEq)]
pub struct VouchStats {
    pub total_vouches: usize,
    /// Mean star rating rounded to 2 decimal places; 0.0 for an empty set.
    pub average_rating: f64,
}

/// One leaderboard row: a rater and how many vouches they submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedVoucher {
    pub user_id: String,
    pub vouch_count: u64,
}

pub fn vouch_stats(vouches: &[Vouch]) -> VouchStats {
    if vouches.is_empty() {
        return VouchStats {
            total_vouches: 0,
            average_rating: 0.0,
        };
    }

    let sum: i64 = vouches.iter().map(|v| v.stars).sum();
    let average = sum as f64 / vouches.len() as f64;

    VouchStats {
        total_vouches: vouches.len(),
        average_rating: (average * 100.0).round() / 100.0,
    }
}

/// Group vouches by rater and rank by count, descending.
///
/// Raters are collected in first-appearance order and the sort is stable,
/// so equal counts keep that order as the tie-break. The result is
/// truncated to `limit` entries.
pub fn rank_vouchers(vouches: &[Vouch], limit: usize) -> Vec<RankedVoucher> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut ranked: Vec<RankedVoucher> = Vec::new();

    for vouch in vouches {
        match index.get(vouch.user_id.as_str()) {
            Some(&i) => ranked[i].vouch_count += 1,
            None => {
                index.insert(vouch.user_id.as_str(), ranked.len());
                ranked.push(RankedVoucher {
                    user_id: vouch.user_id.clone(),
                    vouch_count: 1,
                });
            }
        }
    }

    ranked.sort_by(|a, b| b.vouch_count.cmp(&a.vouch_count));
    ranked.truncate(limit);
    ranked
}
