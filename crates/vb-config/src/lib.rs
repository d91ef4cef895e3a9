mod config;
mod database_config;
mod directory_config;
mod error;
mod file_store_config;
mod log_level;
mod logging_config;
mod server_config;
mod validation_config;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use directory_config::DirectoryConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use file_store_config::FileStoreConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "vouches.db";
const DEFAULT_FILE_STORE_FILENAME: &str = "vouches.txt";

const DEFAULT_DIRECTORY_API_BASE: &str = "https://discord.com/api/v10";
const DEFAULT_DIRECTORY_CDN_BASE: &str = "https://cdn.discordapp.com";
const DEFAULT_DIRECTORY_TIMEOUT_SECS: u64 = 5;
const MAX_DIRECTORY_TIMEOUT_SECS: u64 = 120;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
