use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_IDENTITY_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS,
    MAX_REQUEST_TIMEOUT_SECS, MIN_REQUEST_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Connection settings for the email/password identity service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Base URL of the accounts REST API
    pub base_url: String,
    /// Project API key appended to every request. Never logged.
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_IDENTITY_BASE_URL),
            api_key: None,
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl IdentityConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_http_url(&self.base_url) {
            return Err(ConfigError::identity(format!(
                "identity.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if let Some(key) = &self.api_key
            && key.trim().is_empty()
        {
            return Err(ConfigError::identity("identity.api_key cannot be blank"));
        }

        if !(MIN_REQUEST_TIMEOUT_SECS..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::identity(format!(
                "identity.timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    /// API key, required before talking to the real service.
    pub fn require_api_key(&self) -> ConfigErrorResult<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ConfigError::identity("identity.api_key is not set (AL_IDENTITY_API_KEY)"))
    }
}

pub(crate) fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
