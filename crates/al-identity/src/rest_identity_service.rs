//! Client for an email/password accounts REST API.
//!
//! Endpoints, relative to the configured base URL:
//! - `POST accounts:signUp?key=<api key>`
//! - `POST accounts:signInWithPassword?key=<api key>`
//!
//! Both take `{email, password, returnSecureToken}` and answer with
//! `{localId, email, idToken}`. Failures come back as
//! `{"error": {"code": <status>, "message": "<text>"}}` and the text is
//! surfaced untouched.

use crate::{CurrentSession, IdentityError, IdentityService, Result as IdentityResult};

use al_config::IdentityConfig;
use al_core::{Credential, Identity, SessionToken, Uid};

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Url};
use serde::{Deserialize, Serialize};

const SIGN_UP_PATH: &str = "accounts:signUp";
const SIGN_IN_PATH: &str = "accounts:signInWithPassword";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    id_token: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct RestIdentityService {
    base_url: String,
    api_key: String,
    client: ReqwestClient,
    session: CurrentSession,
}

impl RestIdentityService {
    /// Create a client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://identitytoolkit.googleapis.com/v1")
    /// * `api_key` - Project API key sent as the `key` query parameter
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> IdentityResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
            session: CurrentSession::new(),
        })
    }

    pub fn from_config(config: &IdentityConfig) -> IdentityResult<Self> {
        let api_key = config
            .require_api_key()
            .map_err(|e| IdentityError::configuration(e.to_string()))?;

        Self::new(
            &config.base_url,
            api_key,
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn endpoint(&self, path: &str) -> IdentityResult<Url> {
        Url::parse_with_params(
            &format!("{}/{}", self.base_url, path),
            &[("key", self.api_key.as_str())],
        )
        .map_err(|e| IdentityError::configuration(format!("invalid base url: {e}")))
    }

    async fn password_call(&self, path: &str, credential: &Credential) -> IdentityResult<Identity> {
        let url = self.endpoint(path)?;
        let body = PasswordRequest {
            email: &credential.email,
            password: &credential.password,
            return_secure_token: true,
        };

        debug!("POST {path} for {}", credential.email);
        let response = self.client.post(url).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ErrorEnvelope>(&text) {
                Ok(envelope) => envelope.error.message,
                Err(_) => format!("HTTP {status}: {text}"),
            };
            warn!("{path} rejected for {}: {message}", credential.email);
            return Err(IdentityError::rejected(message));
        }

        let account: AccountResponse = serde_json::from_str(&text)
            .map_err(|e| IdentityError::decode(format!("{path} response: {e}")))?;

        let email = account.email.unwrap_or_else(|| credential.email.clone());
        let mut identity = Identity::new(Uid::from(account.local_id), email);
        if let Some(token) = account.id_token {
            identity = identity.with_session(SessionToken::new(token));
        }

        self.session.replace(identity.clone());
        Ok(identity)
    }
}

#[async_trait]
impl IdentityService for RestIdentityService {
    async fn create_credential(&self, credential: &Credential) -> IdentityResult<Identity> {
        self.password_call(SIGN_UP_PATH, credential).await
    }

    async fn verify_credential(&self, credential: &Credential) -> IdentityResult<Identity> {
        self.password_call(SIGN_IN_PATH, credential).await
    }

    fn current_identity(&self) -> Option<Identity> {
        self.session.get()
    }

    fn sign_out(&self) {
        self.session.clear();
    }
}
