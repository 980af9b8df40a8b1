//! Client for a realtime-database style REST API.
//!
//! Every document lives at `{database_url}/{collection}/{key}.json`.
//! `PUT` replaces it, `GET` returns it or the literal `null` when nothing is
//! stored. The session token travels as the `auth` query parameter and
//! errors arrive as `{"error": "<text>"}`.

use crate::{DocumentStore, Result as StoreResult, StoreError};

use al_config::StoreConfig;
use al_core::{DocumentPath, SessionToken};

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Response, Url};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: String,
}

pub struct RestDocumentStore {
    database_url: String,
    client: ReqwestClient,
}

impl RestDocumentStore {
    /// Create a client
    ///
    /// # Arguments
    /// * `database_url` - Database root (e.g., "https://applab.firebaseio.com")
    /// * `timeout` - Per-request timeout
    pub fn new(database_url: &str, timeout: Duration) -> StoreResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            database_url: database_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        let database_url = config
            .require_database_url()
            .map_err(|e| StoreError::configuration(e.to_string()))?;

        Self::new(database_url, Duration::from_secs(config.timeout_secs))
    }

    fn document_url(&self, path: &DocumentPath, access: Option<&SessionToken>) -> StoreResult<Url> {
        let mut url = Url::parse(&self.database_url)
            .map_err(|e| StoreError::configuration(format!("invalid database url: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| StoreError::configuration("database url cannot be a base"))?
            .pop_if_empty()
            .push(path.collection())
            .push(&format!("{}.json", path.key()));

        if let Some(token) = access {
            url.query_pairs_mut().append_pair("auth", token.expose());
        }

        Ok(url)
    }

    /// Turn a non-success response into a `Rejected` error with the store's text.
    async fn check(path: &DocumentPath, response: Response) -> StoreResult<String> {
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            return Ok(text);
        }

        let message = match serde_json::from_str::<ErrorEnvelope>(&text) {
            Ok(envelope) => envelope.error,
            Err(_) => format!("HTTP {status}: {text}"),
        };
        warn!("Store request for {path} failed: {message}");
        Err(StoreError::rejected(message))
    }
}

#[async_trait]
impl DocumentStore for RestDocumentStore {
    async fn write_document(
        &self,
        path: &DocumentPath,
        value: Value,
        access: Option<&SessionToken>,
    ) -> StoreResult<()> {
        let url = self.document_url(path, access)?;

        debug!("PUT {path}");
        let response = self.client.put(url).json(&value).send().await?;
        Self::check(path, response).await?;

        Ok(())
    }

    async fn read_document_once(
        &self,
        path: &DocumentPath,
        access: Option<&SessionToken>,
    ) -> StoreResult<Option<Value>> {
        let url = self.document_url(path, access)?;

        debug!("GET {path}");
        let response = self.client.get(url).send().await?;
        let text = Self::check(path, response).await?;

        let value: Value = serde_json::from_str(&text)
            .map_err(|e| StoreError::decode(format!("{path}: {e}")))?;

        Ok(match value {
            Value::Null => None,
            other => Some(other),
        })
    }
}
