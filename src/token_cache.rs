//! Cached bearer credential for the catalog API.
//!
//! One credential slot per [`TokenCache`]. A refresh builds a new immutable
//! [`Credential`] and swaps it into the slot, so readers never observe a
//! token paired with another token's expiry. Concurrent callers that find
//! the slot stale may each refresh; the last write wins.

use std::sync::Arc;

use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::clock::{Clock, SystemClock};
use crate::config::ClientCredentials;
use crate::error::{AuthError, ConfigError, TokenError};

/// Subtracted from the declared lifetime so a token never expires mid-request.
pub const SAFETY_MARGIN_MS: i64 = 60_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
    expires_at: i64,
}

impl Credential {
    /// Builds a credential issued at `issued_at` (ms) that the upstream declared
    /// valid for `expires_in_secs`, with the safety margin applied.
    pub fn issued(token: String, issued_at: i64, expires_in_secs: u64) -> Self {
        let lifetime_ms = i64::try_from(expires_in_secs)
            .unwrap_or(i64::MAX)
            .saturating_mul(1000);
        Self {
            token,
            expires_at: issued_at.saturating_add(lifetime_ms) - SAFETY_MARGIN_MS,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Milliseconds since the Unix epoch after which the token is unusable.
    pub fn expires_at(&self) -> i64 {
        self.expires_at
    }

    pub fn is_valid_at(&self, now_ms: i64) -> bool {
        now_ms < self.expires_at
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    expires_in: Option<u64>,
}

pub struct TokenCache {
    client: Client,
    token_url: String,
    credentials: Option<ClientCredentials>,
    clock: Arc<dyn Clock>,
    current: RwLock<Option<Arc<Credential>>>,
}

impl TokenCache {
    pub fn new(client: Client, token_url: String, credentials: Option<ClientCredentials>) -> Self {
        Self::with_clock(client, token_url, credentials, Arc::new(SystemClock))
    }

    pub fn with_clock(
        client: Client,
        token_url: String,
        credentials: Option<ClientCredentials>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            client,
            token_url,
            credentials,
            clock,
            current: RwLock::new(None),
        }
    }

    /// Returns the cached credential while it is valid, otherwise exchanges
    /// the client credentials for a fresh one.
    pub async fn get_token(&self) -> Result<Arc<Credential>, TokenError> {
        let now = self.clock.now_millis();
        if let Some(credential) = self.current.read().await.as_ref() {
            if credential.is_valid_at(now) {
                return Ok(Arc::clone(credential));
            }
        }

        let credentials = self
            .credentials
            .as_ref()
            .ok_or(ConfigError::MissingCredentials)?;

        let fresh = Arc::new(self.exchange(credentials).await?);
        *self.current.write().await = Some(Arc::clone(&fresh));
        Ok(fresh)
    }

    /// The credential currently held, valid or not.
    pub async fn cached(&self) -> Option<Arc<Credential>> {
        self.current.read().await.clone()
    }

    async fn exchange(&self, credentials: &ClientCredentials) -> Result<Credential, AuthError> {
        let response = self
            .client
            .post(&self.token_url)
            .header(AUTHORIZATION, credentials.basic_auth_header())
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "token endpoint rejected credentials");
            return Err(AuthError::UpstreamStatus(status.as_u16()));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Decode(e.to_string()))?;

        let token = body.access_token.ok_or(AuthError::MissingCredentials)?;
        let expires_in = body.expires_in.unwrap_or_default();
        let credential = Credential::issued(token, self.clock.now_millis(), expires_in);

        tracing::info!(
            client_id = credentials.client_id(),
            expires_in,
            "obtained catalog access token"
        );

        Ok(credential)
    }
}
