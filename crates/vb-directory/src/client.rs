use crate::{DirectoryError, DirectoryProfile, Result as DirectoryResult};

use vb_core::ErrorLocation;

use std::time::Duration;

use reqwest::{Client as ReqwestClient, StatusCode};

/// HTTP client for the user-directory REST API.
pub struct DirectoryClient {
    base_url: String,
    bot_token: String,
    client: ReqwestClient,
}

impl DirectoryClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - Directory API base (e.g. "https://discord.com/api/v10")
    /// * `bot_token` - Credential sent as `Authorization: Bot <token>`
    /// * `timeout` - Per-request bound; a hanging directory call must not
    ///   stall the caller indefinitely
    pub fn new(base_url: &str, bot_token: &str, timeout: Duration) -> DirectoryResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            bot_token: bot_token.to_string(),
            client,
        })
    }

    /// Fetch one user record.
    ///
    /// Only HTTP 200 with a deserializable body counts as success.
    pub async fn fetch_user(&self, user_id: &str) -> DirectoryResult<DirectoryProfile> {
        let url = format!("{}/users/{}", self.base_url, user_id);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bot {}", self.bot_token))
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(DirectoryError::UnexpectedStatus {
                status: response.status().as_u16(),
                location: ErrorLocation::caller(),
            });
        }

        response
            .json::<DirectoryProfile>()
            .await
            .map_err(|source| DirectoryError::MalformedBody {
                source,
                location: ErrorLocation::caller(),
            })
    }
}
