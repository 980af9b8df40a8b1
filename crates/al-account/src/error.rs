use al_core::Uid;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Local input problem found before any request is issued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("email cannot be empty")]
    EmptyEmail,

    #[error("password cannot be empty")]
    EmptyPassword,

    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

impl ValidationError {
    /// Input field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::EmptyEmail => "email",
            Self::EmptyPassword | Self::PasswordTooShort { .. } => "password",
        }
    }

    /// Text shown next to the offending field.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyName => "Имя не может быть пустым".to_string(),
            Self::EmptyEmail => "Email не может быть пустым".to_string(),
            Self::EmptyPassword => "Пароль не может быть пустым".to_string(),
            Self::PasswordTooShort { min } => {
                format!("Пароль должен быть не менее {min} символов")
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("Registration input invalid: {0}")]
    Validation(#[from] ValidationError),

    #[error("Identity creation failed: {message} {location}")]
    IdentityCreationFailed {
        message: String,
        location: ErrorLocation,
    },

    /// The credential exists but its profile document does not.
    #[error("Profile write for {uid} failed: {message} {location}")]
    ProfileWriteFailed {
        uid: Uid,
        message: String,
        location: ErrorLocation,
    },
}

impl RegistrationError {
    #[track_caller]
    pub fn identity_creation_failed(message: impl Into<String>) -> Self {
        Self::IdentityCreationFailed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn profile_write_failed(uid: Uid, message: impl Into<String>) -> Self {
        Self::ProfileWriteFailed {
            uid,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Service diagnostic text, or the validation message.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::IdentityCreationFailed { message, .. }
            | Self::ProfileWriteFailed { message, .. } => message.clone(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.user_message(),
            Self::IdentityCreationFailed { message, .. } => {
                format!("Ошибка регистрации: {message}")
            }
            Self::ProfileWriteFailed { message, .. } => {
                format!("Ошибка сохранения данных: {message}")
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("Login input invalid: {0}")]
    Validation(#[from] ValidationError),

    #[error("Authentication failed: {message} {location}")]
    AuthenticationFailed {
        message: String,
        location: ErrorLocation,
    },
}

impl LoginError {
    #[track_caller]
    pub fn authentication_failed(message: impl Into<String>) -> Self {
        Self::AuthenticationFailed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::AuthenticationFailed { message, .. } => message.clone(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.user_message(),
            Self::AuthenticationFailed { message, .. } => format!("Ошибка входа: {message}"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ProfileError {
    /// The read itself failed; no view is delivered.
    #[error("Profile read failed: {message} {location}")]
    ReadFailed {
        message: String,
        location: ErrorLocation,
    },
}

impl ProfileError {
    #[track_caller]
    pub fn read_failed(message: impl Into<String>) -> Self {
        Self::ReadFailed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::ReadFailed { message, .. } => message,
        }
    }

    pub fn user_message(&self) -> String {
        format!("Ошибка загрузки: {}", self.message())
    }
}
