use crate::ProfileError;

use al_core::{Identity, ProfileView};

use serde::Deserialize;
use serde_json::Value;

/// Non-fatal condition reported next to a delivered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileNotice {
    /// No stored profile; the view was built from identity-service fields.
    NotLoaded,
}

impl ProfileNotice {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotLoaded => "Не удалось загрузить данные пользователя.",
        }
    }
}

/// Result of a successful profile read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileLoad {
    pub view: ProfileView,
    pub notice: Option<ProfileNotice>,
}

impl ProfileLoad {
    pub(crate) fn found(view: ProfileView) -> Self {
        Self { view, notice: None }
    }

    pub(crate) fn fallback(identity: &Identity) -> Self {
        Self {
            view: ProfileView::fallback(identity),
            notice: Some(ProfileNotice::NotLoaded),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.notice.is_some()
    }
}

/// Receiver for the callback form of the profile flow.
///
/// Exactly one of `on_profile` or `on_error` is called per read;
/// `on_notice` may follow `on_profile`.
pub trait ProfileListener: Send + Sync {
    fn on_profile(&self, view: &ProfileView);
    fn on_notice(&self, notice: ProfileNotice);
    fn on_error(&self, error: &ProfileError);
}

// Fields are optional so a partially filled document still counts as present.
#[derive(Deserialize)]
struct StoredProfile {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

/// Interpret a stored document as a profile view. Anything that is not a
/// JSON object counts as absent.
pub(crate) fn view_from_document(document: Value) -> Option<ProfileView> {
    if !document.is_object() {
        return None;
    }

    let stored: StoredProfile = serde_json::from_value(document).ok()?;
    Some(ProfileView {
        name: stored.name.unwrap_or_default(),
        email: stored.email.unwrap_or_default(),
    })
}
