use crate::{
    ConfigError, ConfigErrorResult, DatabaseConfig, DirectoryConfig, FileStoreConfig,
    LoggingConfig, ServerConfig, ValidationConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub file_store: FileStoreConfig,
    pub directory: DirectoryConfig,
    pub validation: ValidationConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for VB_CONFIG_DIR env var, else use ./.vb/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply VB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: VB_CONFIG_DIR env var > ./.vb/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("VB_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".vb"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.directory.validate()?;
        self.validation.validate()?;

        // Validate storage paths don't escape the config dir
        for (name, path) in [
            ("database.path", &self.database.path),
            ("file_store.path", &self.file_store.path),
        ] {
            let p = std::path::Path::new(path);
            if p.is_absolute() || path.contains("..") {
                return Err(ConfigError::database(format!(
                    "{name} must be relative and cannot contain '..'"
                )));
            }
        }

        Ok(())
    }

    /// Get absolute path to the sqlite database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get absolute path to the legacy line-oriented vouch file.
    pub fn file_store_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.file_store.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs the bot token).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!("  file_store: {}", self.file_store.path);

        info!(
            "  directory: {} (lookups {}, timeout {}s)",
            self.directory.api_base,
            if self.directory.bot_token.is_some() {
                "enabled"
            } else {
                "disabled - synthetic identities only"
            },
            self.directory.timeout_secs
        );

        info!(
            "  validation: stars {}-{}, message <= {} chars",
            self.validation.min_stars, self.validation.max_stars,
            self.validation.max_message_length
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("VB_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("VB_SERVER_PORT", &mut self.server.port);

        // Storage
        Self::apply_env_string("VB_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_string("VB_FILE_STORE_PATH", &mut self.file_store.path);

        // Directory
        Self::apply_env_string("VB_DIRECTORY_API_BASE", &mut self.directory.api_base);
        Self::apply_env_string("VB_DIRECTORY_CDN_BASE", &mut self.directory.cdn_base);
        Self::apply_env_option_string("VB_DIRECTORY_BOT_TOKEN", &mut self.directory.bot_token);
        Self::apply_env_parse("VB_DIRECTORY_TIMEOUT_SECS", &mut self.directory.timeout_secs);

        // Validation
        Self::apply_env_parse("VB_VALIDATION_MIN_STARS", &mut self.validation.min_stars);
        Self::apply_env_parse("VB_VALIDATION_MAX_STARS", &mut self.validation.max_stars);
        Self::apply_env_parse(
            "VB_VALIDATION_MAX_MESSAGE_LENGTH",
            &mut self.validation.max_message_length,
        );

        // Logging
        Self::apply_env_parse("VB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("VB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("VB_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name) {
            if let Ok(parsed) = val.parse() {
                *target = parsed;
            }
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
