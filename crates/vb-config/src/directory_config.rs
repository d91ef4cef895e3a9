use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DIRECTORY_API_BASE, DEFAULT_DIRECTORY_CDN_BASE,
    DEFAULT_DIRECTORY_TIMEOUT_SECS, MAX_DIRECTORY_TIMEOUT_SECS,
};

use serde::Deserialize;

/// External user-directory lookup settings.
///
/// Without a `bot_token` the resolver never makes a network call and every
/// identity is synthesized locally.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// REST base for user lookups, e.g. `https://discord.com/api/v10`.
    pub api_base: String,
    /// CDN base used when building avatar URLs.
    pub cdn_base: String,
    /// Bearer credential sent as `Authorization: Bot <token>`.
    pub bot_token: Option<String>,
    /// Upper bound for a single lookup; a slow directory must not stall
    /// unrelated requests.
    pub timeout_secs: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            api_base: String::from(DEFAULT_DIRECTORY_API_BASE),
            cdn_base: String::from(DEFAULT_DIRECTORY_CDN_BASE),
            bot_token: None,
            timeout_secs: DEFAULT_DIRECTORY_TIMEOUT_SECS,
        }
    }
}

impl DirectoryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.timeout_secs == 0 || self.timeout_secs > MAX_DIRECTORY_TIMEOUT_SECS {
            return Err(ConfigError::directory(format!(
                "directory.timeout_secs must be 1-{}, got {}",
                MAX_DIRECTORY_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if self.api_base.trim().is_empty() {
            return Err(ConfigError::directory("directory.api_base must not be empty"));
        }

        if self.cdn_base.trim().is_empty() {
            return Err(ConfigError::directory("directory.cdn_base must not be empty"));
        }

        if let Some(token) = &self.bot_token {
            if token.trim().is_empty() {
                return Err(ConfigError::directory(
                    "directory.bot_token must not be empty when set; omit it to disable lookups",
                ));
            }
        }

        Ok(())
    }
}
