use crate::IdentityConfig;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};

#[test]
fn given_default_identity_config_when_validate_then_ok() {
    assert_that!(IdentityConfig::default().validate(), ok(anything()));
}

#[test]
fn given_non_http_base_url_when_validate_then_error() {
    let config = IdentityConfig {
        base_url: "ftp://accounts.example.com".to_string(),
        ..IdentityConfig::default()
    };

    let result = config.validate();

    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("identity.base_url"));
}

#[test]
fn given_blank_api_key_when_validate_then_error() {
    let config = IdentityConfig {
        api_key: Some("   ".to_string()),
        ..IdentityConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_zero_timeout_when_validate_then_error() {
    let config = IdentityConfig {
        timeout_secs: 0,
        ..IdentityConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}
