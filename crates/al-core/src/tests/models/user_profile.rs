use crate::UserProfile;

use chrono::{Local, NaiveDate};
use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_date_when_creating_profile_then_formats_day_month_year() {
    let day = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();

    let profile = UserProfile::new("Ann", "a@b.com", day);

    assert_that!(profile.registration_date, eq("07-03-2024"));
    assert_eq!(profile.registered_on().unwrap(), day);
}

#[test]
fn given_profile_when_registered_now_then_uses_local_date() {
    let before = Local::now().date_naive();
    let profile = UserProfile::registered_now("Ann", "a@b.com");
    let after = Local::now().date_naive();

    let day = profile.registered_on().unwrap();
    assert!(day == before || day == after);
}

#[test]
fn given_profile_when_serialized_then_uses_stored_field_names() {
    let profile = UserProfile::new("Ann", "a@b.com", NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());

    let value = serde_json::to_value(&profile).unwrap();

    assert_eq!(
        value,
        json!({
            "name": "Ann",
            "email": "a@b.com",
            "registrationDate": "31-12-2024"
        })
    );
}

#[test]
fn given_malformed_date_when_parsing_then_returns_error() {
    let profile = UserProfile {
        name: "Ann".to_string(),
        email: "a@b.com".to_string(),
        registration_date: "2024-12-31".to_string(),
    };

    assert!(profile.registered_on().is_err());
}
