use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Validation constraints
pub const MIN_STARS_FLOOR: i64 = 1;
pub const MAX_STARS_CEILING: i64 = 100;
pub const DEFAULT_MIN_STARS: i64 = 1;
pub const DEFAULT_MAX_STARS: i64 = 5;

pub const MAX_MESSAGE_LENGTH_CEILING: usize = 100000;
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 1000;

/// Validation configuration for submitted vouches.
///
/// The star range is an explicit, named setting: a rating of 0 is rejected
/// by range validation, not by an accidental falsy check.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Lowest accepted star rating
    pub min_stars: i64,
    /// Highest accepted star rating
    pub max_stars: i64,
    /// Maximum length for vouch messages
    pub max_message_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_stars: DEFAULT_MIN_STARS,
            max_stars: DEFAULT_MAX_STARS,
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_stars < MIN_STARS_FLOOR {
            return Err(ConfigError::validation(format!(
                "validation.min_stars must be >= {}, got {}",
                MIN_STARS_FLOOR, self.min_stars
            )));
        }

        if self.max_stars > MAX_STARS_CEILING {
            return Err(ConfigError::validation(format!(
                "validation.max_stars must be <= {}, got {}",
                MAX_STARS_CEILING, self.max_stars
            )));
        }

        if self.min_stars > self.max_stars {
            return Err(ConfigError::validation(format!(
                "validation.min_stars ({}) must not exceed validation.max_stars ({})",
                self.min_stars, self.max_stars
            )));
        }

        if self.max_message_length == 0 || self.max_message_length > MAX_MESSAGE_LENGTH_CEILING {
            return Err(ConfigError::validation(format!(
                "validation.max_message_length must be 1-{}, got {}",
                MAX_MESSAGE_LENGTH_CEILING, self.max_message_length
            )));
        }

        Ok(())
    }
}
