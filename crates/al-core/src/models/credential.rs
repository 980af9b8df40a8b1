//! Email/password pair supplied by a user.

use std::fmt;

/// Credential as entered on the login or registration screen.
///
/// Never persisted here; it is handed to the identity service, which owns
/// its lifecycle.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub email: String,
    pub password: String,
}

impl Credential {
    /// Build a credential from raw input, trimming both fields (password
    /// included) with [`trim_input`].
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: trim_input(email).to_string(),
            password: trim_input(password).to_string(),
        }
    }
}

/// Strip leading and trailing characters at or below U+0020 (space and
/// ASCII controls). Other Unicode whitespace such as U+00A0 is kept.
pub fn trim_input(raw: &str) -> &str {
    raw.trim_matches(|c: char| c <= ' ')
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
