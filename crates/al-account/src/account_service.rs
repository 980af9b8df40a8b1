use crate::profile::view_from_document;
use crate::{
    AccountSettings, LoginError, ProfileError, ProfileListener, ProfileLoad, RegistrationError,
    Session, validate_login, validate_registration,
};

use al_core::{DocumentPath, UserProfile};
use al_identity::IdentityService;
use al_store::DocumentStore;

use std::sync::Arc;

use log::{error, info, warn};

/// Orchestrates the account flows over an identity service `I` and a
/// document store `S`.
pub struct AccountService<I: IdentityService + ?Sized, S: DocumentStore + ?Sized> {
    identity: Arc<I>,
    store: Arc<S>,
    settings: AccountSettings,
}

impl<I, S> AccountService<I, S>
where
    I: IdentityService + ?Sized,
    S: DocumentStore + ?Sized,
{
    pub fn new(identity: Arc<I>, store: Arc<S>, settings: AccountSettings) -> Self {
        Self {
            identity,
            store,
            settings,
        }
    }

    pub fn settings(&self) -> &AccountSettings {
        &self.settings
    }

    /// Register a new user.
    ///
    /// 1. Validate input (no request is made on failure)
    /// 2. Create the credential with the identity service
    /// 3. Write `{name, email, registrationDate}` to `Users/{uid}`
    ///
    /// If step 3 fails the credential from step 2 stays in place; nothing
    /// rolls it back.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), RegistrationError> {
        let input =
            validate_registration(name, email, password, self.settings.min_password_length)?;

        info!("Registering {}", input.credential.email);
        let identity = self
            .identity
            .create_credential(&input.credential)
            .await
            .map_err(|e| {
                warn!("Credential creation failed for {}: {e}", input.credential.email);
                RegistrationError::identity_creation_failed(e.message())
            })?;

        let profile = UserProfile::registered_now(input.name, input.credential.email);
        let path = DocumentPath::profile(&self.settings.profiles_collection, &identity.uid)
            .map_err(|e| {
                RegistrationError::profile_write_failed(identity.uid.clone(), e.to_string())
            })?;
        let document = serde_json::to_value(&profile).map_err(|e| {
            RegistrationError::profile_write_failed(identity.uid.clone(), e.to_string())
        })?;

        self.store
            .write_document(&path, document, identity.session.as_ref())
            .await
            .map_err(|e| {
                error!(
                    "Profile write to {path} failed, credential {} left without profile: {e}",
                    identity.uid
                );
                RegistrationError::profile_write_failed(identity.uid.clone(), e.message())
            })?;

        info!("Registered {} as {}", profile.email, identity.uid);
        Ok(())
    }

    /// Log in with email and password. The service's error text is passed
    /// through as-is; wrong password and unknown user are not told apart.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, LoginError> {
        let credential = validate_login(email, password)?;

        info!("Logging in {}", credential.email);
        let identity = self
            .identity
            .verify_credential(&credential)
            .await
            .map_err(|e| {
                warn!("Login failed for {}: {e}", credential.email);
                LoginError::authentication_failed(e.message())
            })?;

        info!("Logged in {} as {}", identity.email, identity.uid);
        Ok(Session::new(identity))
    }

    /// Session for the identity the identity service still holds, if any.
    pub fn resume_session(&self) -> Option<Session> {
        self.identity.current_identity().map(Session::new)
    }

    /// Read the signed-in user's profile once.
    ///
    /// A missing or unreadable document yields the fallback view plus
    /// `ProfileNotice::NotLoaded`; only a failed read is an error.
    pub async fn load_profile(&self, session: &Session) -> Result<ProfileLoad, ProfileError> {
        let identity = session.identity();
        let path = DocumentPath::profile(&self.settings.profiles_collection, &identity.uid)
            .map_err(|e| ProfileError::read_failed(e.to_string()))?;

        let document = self
            .store
            .read_document_once(&path, identity.session.as_ref())
            .await
            .map_err(|e| {
                warn!("Profile read from {path} failed: {e}");
                ProfileError::read_failed(e.message())
            })?;

        match document.and_then(view_from_document) {
            Some(view) => {
                info!("Loaded profile for {}", identity.uid);
                Ok(ProfileLoad::found(view))
            }
            None => {
                warn!("No profile at {path}, falling back to identity fields");
                Ok(ProfileLoad::fallback(identity))
            }
        }
    }

    /// Callback form of `load_profile`.
    pub async fn deliver_profile(&self, session: &Session, listener: &dyn ProfileListener) {
        match self.load_profile(session).await {
            Ok(load) => {
                listener.on_profile(&load.view);
                if let Some(notice) = load.notice {
                    listener.on_notice(notice);
                }
            }
            Err(e) => listener.on_error(&e),
        }
    }

    /// End the session. Always succeeds.
    pub fn logout(&self, session: Session) {
        self.identity.sign_out();
        info!("Logged out {}", session.uid());
    }
}
