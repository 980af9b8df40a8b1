use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR, IdentityConfig, LoggingConfig,
    StoreConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "AL_CONFIG_DIR";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub identity: IdentityConfig,
    pub store: StoreConfig,
    pub validation: ValidationConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for AL_CONFIG_DIR env var, else use ./.accountlab/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply AL_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: AL_CONFIG_DIR env var > ./.accountlab/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all sections. Remote endpoints are optional here; see
    /// `validate_remote()` for what the networked clients need.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.identity.validate()?;
        self.store.validate()?;
        self.validation.validate()?;

        if let Some(file) = &self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::logging(
                "logging.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Check that both remote services are configured.
    pub fn validate_remote(&self) -> ConfigErrorResult<()> {
        self.identity.require_api_key()?;
        self.store.require_database_url()?;
        Ok(())
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(Self::config_dir()?.join(&self.logging.dir).join(file))),
            None => Ok(None),
        }
    }

    /// Log configuration summary (NEVER logs the API key).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  identity: {} (api key: {}, timeout {}s)",
            self.identity.base_url,
            if self.identity.api_key.is_some() {
                "set"
            } else {
                "missing"
            },
            self.identity.timeout_secs
        );
        info!(
            "  store: {} (collection '{}', timeout {}s)",
            self.store.database_url.as_deref().unwrap_or("<unset>"),
            self.store.profiles_collection,
            self.store.timeout_secs
        );
        info!(
            "  validation: min_password_length={}",
            self.validation.min_password_length
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Identity
        Self::apply_env_string("AL_IDENTITY_BASE_URL", &mut self.identity.base_url);
        Self::apply_env_option_string("AL_IDENTITY_API_KEY", &mut self.identity.api_key);
        Self::apply_env_parse("AL_IDENTITY_TIMEOUT_SECS", &mut self.identity.timeout_secs);

        // Store
        Self::apply_env_option_string("AL_STORE_DATABASE_URL", &mut self.store.database_url);
        Self::apply_env_string(
            "AL_STORE_PROFILES_COLLECTION",
            &mut self.store.profiles_collection,
        );
        Self::apply_env_parse("AL_STORE_TIMEOUT_SECS", &mut self.store.timeout_secs);

        // Validation
        Self::apply_env_parse(
            "AL_VALIDATION_MIN_PASSWORD_LENGTH",
            &mut self.validation.min_password_length,
        );

        // Logging
        Self::apply_env_parse("AL_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("AL_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_string("AL_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("AL_LOG_FILE", &mut self.logging.file);
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
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
