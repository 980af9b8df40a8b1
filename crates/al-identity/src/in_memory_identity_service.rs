//! Process-local identity service with the same observable behaviour as the
//! REST service. Backs the offline CLI mode and the orchestration tests.

use crate::{CurrentSession, IdentityError, IdentityService, Result as IdentityResult};

use al_core::{Credential, Identity, SessionToken, Uid};

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

pub const EMAIL_EXISTS: &str = "EMAIL_EXISTS";
pub const EMAIL_NOT_FOUND: &str = "EMAIL_NOT_FOUND";
pub const INVALID_PASSWORD: &str = "INVALID_PASSWORD";
pub const INVALID_EMAIL: &str = "INVALID_EMAIL";
pub const WEAK_PASSWORD: &str = "WEAK_PASSWORD : Password should be at least 6 characters";

const SERVICE_MIN_PASSWORD_LENGTH: usize = 6;

struct Account {
    uid: Uid,
    email: String,
    password: String,
}

#[derive(Default)]
pub struct InMemoryIdentityService {
    // keyed by lowercased email
    accounts: RwLock<HashMap<String, Account>>,
    session: CurrentSession,
}

impl InMemoryIdentityService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn account_count(&self) -> usize {
        self.accounts.read().await.len()
    }

    fn issue(account: &Account) -> Identity {
        Identity::new(account.uid.clone(), account.email.clone())
            .with_session(SessionToken::new(Uuid::new_v4().to_string()))
    }
}

#[async_trait]
impl IdentityService for InMemoryIdentityService {
    async fn create_credential(&self, credential: &Credential) -> IdentityResult<Identity> {
        if !credential.email.contains('@') {
            return Err(IdentityError::rejected(INVALID_EMAIL));
        }
        if credential.password.chars().count() < SERVICE_MIN_PASSWORD_LENGTH {
            return Err(IdentityError::rejected(WEAK_PASSWORD));
        }

        let mut accounts = self.accounts.write().await;
        let key = credential.email.to_lowercase();
        if accounts.contains_key(&key) {
            return Err(IdentityError::rejected(EMAIL_EXISTS));
        }

        let account = Account {
            uid: Uid::new(Uuid::new_v4().simple().to_string()),
            email: credential.email.clone(),
            password: credential.password.clone(),
        };
        let identity = Self::issue(&account);
        accounts.insert(key, account);

        self.session.replace(identity.clone());
        Ok(identity)
    }

    async fn verify_credential(&self, credential: &Credential) -> IdentityResult<Identity> {
        let accounts = self.accounts.read().await;
        let account = accounts
            .get(&credential.email.to_lowercase())
            .ok_or_else(|| IdentityError::rejected(EMAIL_NOT_FOUND))?;

        if account.password != credential.password {
            return Err(IdentityError::rejected(INVALID_PASSWORD));
        }

        let identity = Self::issue(account);
        self.session.replace(identity.clone());
        Ok(identity)
    }

    fn current_identity(&self) -> Option<Identity> {
        self.session.get()
    }

    fn sign_out(&self) {
        self.session.clear();
    }
}
