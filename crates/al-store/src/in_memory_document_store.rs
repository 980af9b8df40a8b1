//! Process-local document store for the offline CLI mode and tests.
//!
//! Reads and writes can be switched to fail with a fixed message, which is
//! how the orphaned-credential and read-failure paths get exercised.

use crate::{DocumentStore, Result as StoreResult, StoreError};

use al_core::{DocumentPath, SessionToken};

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<DocumentPath, Value>>,
    write_failure: RwLock<Option<String>>,
    read_failure: RwLock<Option<String>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following write fail with `message`; `None` restores writes.
    pub async fn fail_writes_with(&self, message: Option<&str>) {
        *self.write_failure.write().await = message.map(String::from);
    }

    /// Make every following read fail with `message`; `None` restores reads.
    pub async fn fail_reads_with(&self, message: Option<&str>) {
        *self.read_failure.write().await = message.map(String::from);
    }

    /// Peek at a stored document without going through the trait.
    pub async fn get(&self, path: &DocumentPath) -> Option<Value> {
        self.documents.read().await.get(path).cloned()
    }

    /// Seed a document directly.
    pub async fn insert(&self, path: DocumentPath, value: Value) {
        self.documents.write().await.insert(path, value);
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn write_document(
        &self,
        path: &DocumentPath,
        value: Value,
        _access: Option<&SessionToken>,
    ) -> StoreResult<()> {
        if let Some(message) = self.write_failure.read().await.as_deref() {
            return Err(StoreError::rejected(message));
        }

        // null deletes, same as the remote store
        let mut documents = self.documents.write().await;
        if value.is_null() {
            documents.remove(path);
        } else {
            documents.insert(path.clone(), value);
        }
        Ok(())
    }

    async fn read_document_once(
        &self,
        path: &DocumentPath,
        _access: Option<&SessionToken>,
    ) -> StoreResult<Option<Value>> {
        if let Some(message) = self.read_failure.read().await.as_deref() {
            return Err(StoreError::rejected(message));
        }

        Ok(self.documents.read().await.get(path).cloned())
    }
}
