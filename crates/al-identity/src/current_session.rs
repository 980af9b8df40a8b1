use al_core::Identity;

use std::sync::{Mutex, PoisonError};

/// Locally signed-in identity, shared by the service implementations.
#[derive(Debug, Default)]
pub struct CurrentSession {
    identity: Mutex<Option<Identity>>,
}

impl CurrentSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<Identity> {
        self.identity
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn replace(&self, identity: Identity) {
        *self.identity.lock().unwrap_or_else(PoisonError::into_inner) = Some(identity);
    }

    pub fn clear(&self) {
        self.identity
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}
