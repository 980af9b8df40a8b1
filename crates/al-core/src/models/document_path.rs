//! Addressing of documents in the store as `collection/key`.

use crate::{CoreError, Result as CoreErrorResult, Uid};

use std::fmt;

const FORBIDDEN_CHARS: [char; 8] = ['/', '.', '#', '$', '[', ']', '?', '%'];

fn is_forbidden(c: char) -> bool {
    FORBIDDEN_CHARS.contains(&c) || c.is_whitespace() || c.is_control()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentPath {
    collection: String,
    key: String,
}

impl DocumentPath {
    #[track_caller]
    pub fn new(collection: impl Into<String>, key: impl Into<String>) -> CoreErrorResult<Self> {
        let collection = collection.into();
        let key = key.into();
        Self::check_segment(&collection)?;
        Self::check_segment(&key)?;
        Ok(Self { collection, key })
    }

    /// Path of the profile document for `uid` inside `collection`.
    #[track_caller]
    pub fn profile(collection: &str, uid: &Uid) -> CoreErrorResult<Self> {
        Self::new(collection, uid.as_str())
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    #[track_caller]
    fn check_segment(segment: &str) -> CoreErrorResult<()> {
        if segment.is_empty() {
            return Err(CoreError::invalid_path(segment, "segment cannot be empty"));
        }
        if let Some(c) = segment.chars().find(|&c| is_forbidden(c)) {
            return Err(CoreError::invalid_path(
                segment,
                format!("segment cannot contain {c:?}"),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.key)
    }
}
