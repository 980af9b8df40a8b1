pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::credential::{Credential, trim_input};
pub use models::document_path::DocumentPath;
pub use models::identity::Identity;
pub use models::profile_view::{FALLBACK_PROFILE_NAME, ProfileView};
pub use models::session_token::SessionToken;
pub use models::uid::Uid;
pub use models::user_profile::{REGISTRATION_DATE_FORMAT, UserProfile};

/// Collection that holds one profile document per registered user.
pub const PROFILES_COLLECTION: &str = "Users";
