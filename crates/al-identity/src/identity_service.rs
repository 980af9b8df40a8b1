use crate::Result as IdentityResult;

use al_core::{Credential, Identity};

use async_trait::async_trait;

/// External system of record for credentials and session identity.
///
/// Each call issues at most one request and completes exactly once.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Create a new credential. On success the new identity also becomes the
    /// current local session.
    async fn create_credential(&self, credential: &Credential) -> IdentityResult<Identity>;

    /// Verify an existing credential. On success the identity becomes the
    /// current local session.
    async fn verify_credential(&self, credential: &Credential) -> IdentityResult<Identity>;

    /// Identity of the locally signed-in user, if any.
    fn current_identity(&self) -> Option<Identity>;

    /// Forget the local session. Never fails.
    fn sign_out(&self);
}
