//! Profile document stored under `Users/{uid}`.

use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// `dd-MM-yyyy`
pub const REGISTRATION_DATE_FORMAT: &str = "%d-%m-%Y";

/// Stored profile of one registered user.
///
/// Created once at registration and never updated by any flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub registration_date: String,
}

impl UserProfile {
    /// Create a profile registered on the given calendar day.
    pub fn new(name: impl Into<String>, email: impl Into<String>, registered_on: NaiveDate) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            registration_date: registered_on.format(REGISTRATION_DATE_FORMAT).to_string(),
        }
    }

    /// Create a profile stamped with today's date from the local clock.
    pub fn registered_now(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::new(name, email, Local::now().date_naive())
    }

    /// Parse `registration_date` back into a calendar date.
    #[track_caller]
    pub fn registered_on(&self) -> CoreErrorResult<NaiveDate> {
        NaiveDate::parse_from_str(&self.registration_date, REGISTRATION_DATE_FORMAT).map_err(
            |source| CoreError::InvalidDate {
                value: self.registration_date.clone(),
                source,
                location: ErrorLocation::from(Location::caller()),
            },
        )
    }
}
