use al_core::{Identity, Uid};

/// Proof of a successful login within this process.
///
/// Only `AccountService::login` and `AccountService::resume_session` create
/// one, and `AccountService::logout` consumes it, so the profile flow cannot
/// run without a live session. Not `Clone`.
#[derive(Debug)]
pub struct Session {
    identity: Identity,
}

impl Session {
    pub(crate) fn new(identity: Identity) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn uid(&self) -> &Uid {
        &self.identity.uid
    }

    pub fn email(&self) -> &str {
        &self.identity.email
    }
}
