mod config;
mod error;
mod identity_config;
mod log_level;
mod logging_config;
mod store_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use config::{CONFIG_DIR_ENV, Config};
pub use error::{ConfigError, ConfigErrorResult};
pub use identity_config::IdentityConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use store_config::StoreConfig;
pub use validation_config::{MIN_PASSWORD_LENGTH_CEILING, MIN_PASSWORD_LENGTH_FLOOR, ValidationConfig};

const DEFAULT_CONFIG_DIR: &str = ".accountlab";
const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
const DEFAULT_PROFILES_COLLECTION: &str = "Users";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
