use crate::{CoreError, DocumentPath, PROFILES_COLLECTION, Uid};

use googletest::prelude::*;

#[test]
fn given_uid_when_building_profile_path_then_renders_collection_slash_uid() {
    let path = DocumentPath::profile(PROFILES_COLLECTION, &Uid::new("abc123")).unwrap();

    assert_that!(path.to_string(), eq("Users/abc123"));
    assert_eq!(path.collection(), "Users");
    assert_eq!(path.key(), "abc123");
}

#[test]
fn given_empty_key_when_building_path_then_rejected() {
    let result = DocumentPath::new("Users", "");

    assert!(matches!(result, Err(CoreError::InvalidPath { .. })));
}

#[test]
fn given_key_with_slash_when_building_path_then_rejected() {
    let result = DocumentPath::new("Users", "a/b");

    assert!(matches!(result, Err(CoreError::InvalidPath { .. })));
    let message = result.unwrap_err().to_string();
    assert_that!(message, contains_substring("'/'"));
}

#[test]
fn given_key_with_dot_when_building_path_then_rejected() {
    assert!(DocumentPath::new("Users", "a.b").is_err());
}

#[test]
fn given_segment_with_url_reserved_chars_when_building_path_then_rejected() {
    for collection in ["Users?x", "Users%2F", "My Users", "Users\tx", "Users\u{00A0}"] {
        let result = DocumentPath::new(collection, "abc123");

        assert!(
            matches!(result, Err(CoreError::InvalidPath { .. })),
            "{collection:?} was accepted"
        );
    }
}
