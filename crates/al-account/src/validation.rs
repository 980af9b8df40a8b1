//! Input checks run before any request leaves the client.
//!
//! Checks run in a fixed order and stop at the first failure; errors are
//! never accumulated.

use crate::ValidationError;

use al_core::{Credential, trim_input};

/// Registration input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationInput {
    pub name: String,
    pub credential: Credential,
}

/// Validate registration input: name, then email, then password presence,
/// then password length. Input is trimmed first with [`trim_input`].
///
/// Length is counted in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane (e.g. an emoji) counts as two.
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    min_password_length: usize,
) -> Result<RegistrationInput, ValidationError> {
    let name = trim_input(name);
    let credential = Credential::new(email, password);

    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    check_credential(&credential)?;
    if credential.password.encode_utf16().count() < min_password_length {
        return Err(ValidationError::PasswordTooShort {
            min: min_password_length,
        });
    }

    Ok(RegistrationInput {
        name: name.to_string(),
        credential,
    })
}

/// Validate login input: email, then password presence. Input is trimmed first.
pub fn validate_login(email: &str, password: &str) -> Result<Credential, ValidationError> {
    let credential = Credential::new(email, password);
    check_credential(&credential)?;
    Ok(credential)
}

fn check_credential(credential: &Credential) -> Result<(), ValidationError> {
    if credential.email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if credential.password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    Ok(())
}
