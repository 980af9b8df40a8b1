use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid document path segment '{segment}': {message} {location}")]
    InvalidPath {
        segment: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid registration date '{value}': {source} {location}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn invalid_path(segment: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPath {
            segment: segment.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
