use crate::Identity;

/// Name shown when no profile document exists for the signed-in user.
pub const FALLBACK_PROFILE_NAME: &str = "Имя не найдено";

/// What the home screen renders for the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub name: String,
    pub email: String,
}

impl ProfileView {
    /// View built from identity-service fields when the profile is missing.
    pub fn fallback(identity: &Identity) -> Self {
        Self {
            name: FALLBACK_PROFILE_NAME.to_string(),
            email: identity.email.clone(),
        }
    }
}
