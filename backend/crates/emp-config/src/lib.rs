mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod source_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use source_config::SourceConfig;

const CONFIG_DIR_ENV: &str = "EMP_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".emp";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "employees.db";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_SOURCE_BASE_URL: &str = "http://dummy.restapiexample.com/api/v1";
const DEFAULT_SOURCE_TIMEOUT_SECS: u64 = 30;
const MAX_SOURCE_TIMEOUT_SECS: u64 = 3600;
