use crate::identity_config::is_http_url;
use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_PROFILES_COLLECTION, DEFAULT_REQUEST_TIMEOUT_SECS,
    MAX_REQUEST_TIMEOUT_SECS, MIN_REQUEST_TIMEOUT_SECS,
};

use serde::Deserialize;

const FORBIDDEN_COLLECTION_CHARS: [char; 8] = ['/', '.', '#', '$', '[', ']', '?', '%'];

/// Connection settings for the realtime document store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Root URL of the database, e.g. `https://<project>.firebaseio.com`
    pub database_url: Option<String>,
    /// Collection holding one profile document per user
    pub profiles_collection: String,
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            profiles_collection: String::from(DEFAULT_PROFILES_COLLECTION),
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(url) = &self.database_url
            && !is_http_url(url)
        {
            return Err(ConfigError::store(format!(
                "store.database_url must start with http:// or https://, got '{url}'"
            )));
        }

        if self.profiles_collection.is_empty() {
            return Err(ConfigError::store("store.profiles_collection cannot be empty"));
        }

        if self
            .profiles_collection
            .contains(|c: char| {
                FORBIDDEN_COLLECTION_CHARS.contains(&c) || c.is_whitespace() || c.is_control()
            })
        {
            return Err(ConfigError::store(format!(
                "store.profiles_collection cannot contain whitespace or any of {:?}, got '{}'",
                FORBIDDEN_COLLECTION_CHARS, self.profiles_collection
            )));
        }

        if !(MIN_REQUEST_TIMEOUT_SECS..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::store(format!(
                "store.timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    /// Database URL, required before talking to the real store.
    pub fn require_database_url(&self) -> ConfigErrorResult<&str> {
        self.database_url
            .as_deref()
            .ok_or_else(|| ConfigError::store("store.database_url is not set (AL_STORE_DATABASE_URL)"))
    }
}
