//! Registration, login, profile-read and logout flows over an identity
//! service and a document store.
//!
//! Every flow issues its requests strictly one after another: a follow-up
//! request is only sent after the previous one has completed.

pub mod account_service;
pub mod account_settings;
pub mod error;
pub mod profile;
pub mod session;
pub mod validation;

#[cfg(test)]
mod tests;

pub use account_service::AccountService;
pub use account_settings::AccountSettings;
pub use error::{LoginError, ProfileError, RegistrationError, ValidationError};
pub use profile::{ProfileListener, ProfileLoad, ProfileNotice};
pub use session::Session;
pub use validation::{RegistrationInput, validate_login, validate_registration};
