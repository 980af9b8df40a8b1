use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The store answered and refused the request; `message` is its own text.
    #[error("Document store rejected request: {message} {location}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },

    #[error("Document store unreachable: {message} {location}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Document could not be decoded: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Document store client misconfigured: {message} {location}")]
    Configuration {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Diagnostic text as reported by the store, without location.
    pub fn message(&self) -> &str {
        match self {
            Self::Rejected { message, .. }
            | Self::Transport { message, .. }
            | Self::Decode { message, .. }
            | Self::Configuration { message, .. } => message,
        }
    }
}

impl From<reqwest::Error> for StoreError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        // Request URLs carry credentials in the query string.
        let source = source.without_url();
        Self::Transport {
            message: source.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
