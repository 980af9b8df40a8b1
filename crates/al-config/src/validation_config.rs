use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// The identity service rejects anything shorter, so the minimum cannot go lower.
pub const MIN_PASSWORD_LENGTH_FLOOR: usize = 6;
pub const MIN_PASSWORD_LENGTH_CEILING: usize = 128;
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = MIN_PASSWORD_LENGTH_FLOOR;

/// Input limits applied before any request leaves the client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum password length in characters
    pub min_password_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_password_length < MIN_PASSWORD_LENGTH_FLOOR
            || self.min_password_length > MIN_PASSWORD_LENGTH_CEILING
        {
            return Err(ConfigError::validation(format!(
                "validation.min_password_length must be {}-{}, got {}",
                MIN_PASSWORD_LENGTH_FLOOR, MIN_PASSWORD_LENGTH_CEILING, self.min_password_length
            )));
        }

        Ok(())
    }
}
