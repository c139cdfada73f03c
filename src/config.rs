use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com";

/// Client id and secret for the client-credentials grant.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    client_id: String,
    client_secret: String,
}

impl ClientCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Value for the `Authorization` header of the token request.
    pub fn basic_auth_header(&self) -> String {
        let pair = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", STANDARD.encode(pair))
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// `None` when either half is unset; requests needing auth then fail with a config error.
    pub credentials: Option<ClientCredentials>,
    pub accounts_url: String,
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match non_blank("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let credentials = match (non_blank("SPOTIFY_CLIENT_ID"), non_blank("SPOTIFY_CLIENT_SECRET")) {
            (Some(id), Some(secret)) => Some(ClientCredentials::new(id, secret)),
            _ => None,
        };

        let accounts_url = non_blank("SPOTIFY_ACCOUNTS_URL")
            .unwrap_or_else(|| DEFAULT_ACCOUNTS_URL.to_string());
        let api_url = non_blank("SPOTIFY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self {
            port,
            credentials,
            accounts_url: accounts_url.trim_end_matches('/').to_string(),
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn token_url(&self) -> String {
        format!("{}/api/token", self.accounts_url)
    }
}
