//! Identity issued by the identity service after registration or login.

use crate::{SessionToken, Uid};

/// An authenticated identity.
///
/// Immutable from this side; it lives as long as the authenticated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub uid: Uid,
    pub email: String,
    /// Access context for document store requests, when the service issued one
    pub session: Option<SessionToken>,
}

impl Identity {
    pub fn new(uid: Uid, email: impl Into<String>) -> Self {
        Self {
            uid,
            email: email.into(),
            session: None,
        }
    }

    pub fn with_session(mut self, token: SessionToken) -> Self {
        self.session = Some(token);
        self
    }
}
