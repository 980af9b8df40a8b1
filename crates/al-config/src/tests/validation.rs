use crate::ValidationConfig;
use crate::validation_config::{MIN_PASSWORD_LENGTH_CEILING, MIN_PASSWORD_LENGTH_FLOOR};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};

const BELOW_FLOOR: usize = MIN_PASSWORD_LENGTH_FLOOR - 1;
const ABOVE_CEILING: usize = MIN_PASSWORD_LENGTH_CEILING + 1;

#[test]
fn given_floor_when_validate_then_ok() {
    let config = ValidationConfig {
        min_password_length: MIN_PASSWORD_LENGTH_FLOOR,
    };

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_ceiling_when_validate_then_ok() {
    let config = ValidationConfig {
        min_password_length: MIN_PASSWORD_LENGTH_CEILING,
    };

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_below_floor_when_validate_then_error_mentions_range() {
    let config = ValidationConfig {
        min_password_length: BELOW_FLOOR,
    };

    let result = config.validate();

    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("6-128"));
}

#[test]
fn given_above_ceiling_when_validate_then_error() {
    let config = ValidationConfig {
        min_password_length: ABOVE_CEILING,
    };

    assert_that!(config.validate(), err(anything()));
}
