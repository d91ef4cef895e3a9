use crate::ApiError;

use vb_config::ValidationConfig;

use serde::Deserialize;

/// Incoming vouch submission.
///
/// Every field is optional at the serde layer so that missing fields reach
/// validation and produce the documented 400 body instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateVouchRequest {
    #[serde(default)]
    pub user_id: Option<String>,

    #[serde(default)]
    pub stars: Option<i64>,

    /// Vouch message; wire name kept from the original client contract.
    #[serde(default)]
    pub msg: Option<String>,
}

impl CreateVouchRequest {
    /// Validate and take ownership of the submitted fields.
    ///
    /// A missing or empty field yields the fixed `Missing required fields`
    /// message; a present but out-of-range rating gets a range message.
    pub fn into_validated(
        self,
        validation: &ValidationConfig,
    ) -> Result<(String, i64, String), ApiError> {
        let user_id = self
            .user_id
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let message = self
            .msg
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let (Some(user_id), Some(stars), Some(message)) = (user_id, self.stars, message) else {
            return Err(ApiError::validation("Missing required fields", None));
        };

        if stars < validation.min_stars || stars > validation.max_stars {
            return Err(ApiError::validation(
                format!(
                    "stars must be between {} and {}",
                    validation.min_stars, validation.max_stars
                ),
                Some("stars"),
            ));
        }

        if message.chars().count() > validation.max_message_length {
            return Err(ApiError::validation(
                format!(
                    "msg must be at most {} characters",
                    validation.max_message_length
                ),
                Some("msg"),
            ));
        }

        Ok((user_id, stars, message))
    }
}
