
use crate::{AccountService, AccountSettings};

use al_core::{Credential, DocumentPath, Identity, SessionToken};
use al_identity::{IdentityService, InMemoryIdentityService, Result as IdentityResult};
use al_store::{DocumentStore, InMemoryDocumentStore, Result as StoreResult};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;

/// In-memory identity service that counts network-bound calls.
#[derive(Default)]
pub(crate) struct CountingIdentity {
    pub(crate) inner: InMemoryIdentityService,
    creates: AtomicUsize,
    verifies: AtomicUsize,
}

impl CountingIdentity {
    pub(crate) fn calls(&self) -> usize {
        self.creates.load(Ordering::SeqCst) + self.verifies.load(Ordering::SeqCst)
    }

    pub(crate) fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityService for CountingIdentity {
    async fn create_credential(&self, credential: &Credential) -> IdentityResult<Identity> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.inner.create_credential(credential).await
    }

    async fn verify_credential(&self, credential: &Credential) -> IdentityResult<Identity> {
        self.verifies.fetch_add(1, Ordering::SeqCst);
        self.inner.verify_credential(credential).await
    }

    fn current_identity(&self) -> Option<Identity> {
        self.inner.current_identity()
    }

    fn sign_out(&self) {
        self.inner.sign_out()
    }
}

/// In-memory store that counts calls and remembers the access token used.
#[derive(Default)]
pub(crate) struct CountingStore {
    pub(crate) inner: InMemoryDocumentStore,
    writes: AtomicUsize,
    reads: AtomicUsize,
    last_access: std::sync::Mutex<Option<SessionToken>>,
}

impl CountingStore {
    pub(crate) fn calls(&self) -> usize {
        self.writes.load(Ordering::SeqCst) + self.reads.load(Ordering::SeqCst)
    }

    pub(crate) fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub(crate) fn last_access(&self) -> Option<SessionToken> {
        self.last_access.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentStore for CountingStore {
    async fn write_document(
        &self,
        path: &DocumentPath,
        value: Value,
        access: Option<&SessionToken>,
    ) -> StoreResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        *self.last_access.lock().unwrap() = access.cloned();
        self.inner.write_document(path, value, access).await
    }

    async fn read_document_once(
        &self,
        path: &DocumentPath,
        access: Option<&SessionToken>,
    ) -> StoreResult<Option<Value>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        *self.last_access.lock().unwrap() = access.cloned();
        self.inner.read_document_once(path, access).await
    }
}

pub(crate) struct Harness {
    pub(crate) identity: Arc<CountingIdentity>,
    pub(crate) store: Arc<CountingStore>,
    pub(crate) service: AccountService<CountingIdentity, CountingStore>,
}

pub(crate) fn harness() -> Harness {
    let identity = Arc::new(CountingIdentity::default());
    let store = Arc::new(CountingStore::default());
    let service = AccountService::new(
        Arc::clone(&identity),
        Arc::clone(&store),
        AccountSettings::default(),
    );
    Harness {
        identity,
        store,
        service,
    }
}
