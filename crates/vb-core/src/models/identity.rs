use serde::{Deserialize, Serialize};

/// Display identity resolved for a rater's external identifier.
///
/// Derived on demand (directory lookup or synthetic fallback) and cached
/// in-process; never persisted alongside the vouch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub display_name: String,
    pub avatar_url: String,
}
