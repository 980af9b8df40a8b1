use al_config::Config;
use al_core::PROFILES_COLLECTION;

const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// Knobs the flows read from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSettings {
    pub min_password_length: usize,
    pub profiles_collection: String,
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            profiles_collection: PROFILES_COLLECTION.to_string(),
        }
    }
}

impl AccountSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            min_password_length: config.validation.min_password_length,
            profiles_collection: config.store.profiles_collection.clone(),
        }
    }
}
