use crate::Result as StoreResult;

use al_core::{DocumentPath, SessionToken};

use async_trait::async_trait;
use serde_json::Value;

/// External keyed, schemaless persistence service.
///
/// `access` is the caller's session token, passed explicitly on every call.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Write (create or overwrite) the document at `path`.
    async fn write_document(
        &self,
        path: &DocumentPath,
        value: Value,
        access: Option<&SessionToken>,
    ) -> StoreResult<()>;

    /// Read the document at `path` once. `Ok(None)` means nothing is stored there.
    async fn read_document_once(
        &self,
        path: &DocumentPath,
        access: Option<&SessionToken>,
    ) -> StoreResult<Option<Value>>;
}
