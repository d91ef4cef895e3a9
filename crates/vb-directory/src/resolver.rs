use crate::avatar::{avatar_url, synthetic_identity};
use crate::{DirectoryClient, DirectoryProfile, Result as DirectoryResult};

use vb_config::DirectoryConfig;
use vb_core::Identity;

use std::collections::HashMap;
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::RwLock;

/// Resolves external user identifiers to display identities.
///
/// Cache-first, then remote lookup, then synthetic fallback; `resolve`
/// never fails. Cached entries live for the process lifetime and are never
/// evicted. Concurrent misses for the same id may both hit the directory
/// and race the insert; entries are equivalent, so last writer wins.
pub struct IdentityResolver {
    cdn_base: String,
    client: Option<DirectoryClient>,
    cache: RwLock<HashMap<String, Identity>>,
}

impl IdentityResolver {
    pub fn new(config: &DirectoryConfig) -> DirectoryResult<Self> {
        let client = match &config.bot_token {
            Some(token) => Some(DirectoryClient::new(
                &config.api_base,
                token,
                Duration::from_secs(config.timeout_secs),
            )?),
            None => None,
        };

        Ok(Self {
            cdn_base: config.cdn_base.clone(),
            client,
            cache: RwLock::new(HashMap::new()),
        })
    }

    /// Resolve an identifier to a display identity. Infallible: any lookup
    /// failure degrades to the synthetic fallback without caching it.
    pub async fn resolve(&self, user_id: &str) -> Identity {
        if let Some(hit) = self.cache.read().await.get(user_id) {
            return hit.clone();
        }

        let Some(client) = &self.client else {
            // No credential configured: synthesize locally, no network call.
            return synthetic_identity(&self.cdn_base, user_id);
        };

        match client.fetch_user(user_id).await {
            Ok(profile) => {
                let identity = self.identity_from_profile(user_id, &profile);
                self.cache
                    .write()
                    .await
                    .insert(user_id.to_string(), identity.clone());
                debug!("directory resolved {user_id} -> {}", identity.display_name);
                identity
            }
            Err(e) => {
                warn!("directory lookup failed for {user_id}: {e}");
                synthetic_identity(&self.cdn_base, user_id)
            }
        }
    }

    /// Number of cached identities (process-lifetime, unbounded).
    pub async fn cached(&self) -> usize {
        self.cache.read().await.len()
    }

    fn identity_from_profile(&self, user_id: &str, profile: &DirectoryProfile) -> Identity {
        let display_name = profile
            .global_name
            .clone()
            .or_else(|| profile.username.clone())
            .unwrap_or_else(|| synthetic_identity(&self.cdn_base, user_id).display_name);

        Identity {
            display_name,
            avatar_url: avatar_url(&self.cdn_base, user_id, profile),
        }
    }
}
