pub mod aggregate;
pub mod error;
pub mod models;

pub use aggregate::{LEADERBOARD_SIZE, RankedVoucher, VouchStats, rank_vouchers, vouch_stats};
pub use error::ErrorLocation;
pub use models::identity::Identity;
pub use models::vouch::Vouch;
