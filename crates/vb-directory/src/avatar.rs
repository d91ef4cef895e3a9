//! Avatar URL derivation and the synthetic fallback identity.

use crate::DirectoryProfile;

use vb_core::Identity;

/// Avatar hashes with this prefix point at animated images.
pub const ANIMATED_PREFIX: &str = "a_";

/// Number of placeholder avatar slots on the CDN.
pub const PLACEHOLDER_SLOTS: u32 = 5;

/// Placeholder slot used when nothing better is known.
pub const DEFAULT_PLACEHOLDER_SLOT: u32 = 0;

/// Characters of the raw identifier shown in a synthetic display name.
const SYNTHETIC_NAME_CHARS: usize = 6;

/// Deterministic placeholder identity for an identifier: used when no
/// lookup credential is configured or a lookup fails.
pub fn synthetic_identity(cdn_base: &str, user_id: &str) -> Identity {
    let short: String = user_id.chars().take(SYNTHETIC_NAME_CHARS).collect();

    Identity {
        display_name: format!("User {short}"),
        avatar_url: placeholder_url(cdn_base, DEFAULT_PLACEHOLDER_SLOT),
    }
}

/// Avatar URL for a resolved directory profile.
///
/// A present hash yields a CDN image URL (animated when the hash carries
/// the `a_` marker); an absent hash falls back to one of the five
/// placeholder slots keyed by `discriminator % 5`.
pub fn avatar_url(cdn_base: &str, user_id: &str, profile: &DirectoryProfile) -> String {
    match &profile.avatar {
        Some(hash) if hash.starts_with(ANIMATED_PREFIX) => {
            format!("{cdn_base}/avatars/{user_id}/{hash}.gif")
        }
        Some(hash) => format!("{cdn_base}/avatars/{user_id}/{hash}.png"),
        None => {
            let slot = profile
                .discriminator
                .as_deref()
                .and_then(|d| d.parse::<u32>().ok())
                .unwrap_or(DEFAULT_PLACEHOLDER_SLOT)
                % PLACEHOLDER_SLOTS;
            placeholder_url(cdn_base, slot)
        }
    }
}

pub fn placeholder_url(cdn_base: &str, slot: u32) -> String {
    format!("{cdn_base}/embed/avatars/{slot}.png")
}
