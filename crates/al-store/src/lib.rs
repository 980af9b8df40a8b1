//! Document store capability: keyed, schemaless JSON documents addressed
//! as `collection/key`.

pub mod document_store;
pub mod error;
pub mod in_memory_document_store;
pub mod rest_document_store;


pub use document_store::DocumentStore;
pub use error::{Result, StoreError};
pub use in_memory_document_store::InMemoryDocumentStore;
pub use rest_document_store::RestDocumentStore;
