use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::Client;

use crate::config::Config;
use crate::spotify::SearchClient;
use crate::token_cache::TokenCache;
use crate::validation::{MockValidationProvider, ValidationProvider};

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

pub struct AppState {
    pub search_client: SearchClient,
    pub validator: Arc<dyn ValidationProvider>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(search_client: SearchClient, validator: Arc<dyn ValidationProvider>) -> Self {
        Self {
            search_client,
            validator,
            started_at: Instant::now(),
        }
    }

    /// Wires the production clients from configuration.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(UPSTREAM_TIMEOUT).build()?;

        if config.credentials.is_none() {
            tracing::warn!(
                "SPOTIFY_CLIENT_ID or SPOTIFY_CLIENT_SECRET not set; searches will fail until configured"
            );
        }

        let tokens = Arc::new(TokenCache::new(
            client.clone(),
            config.token_url(),
            config.credentials.clone(),
        ));
        let search_client = SearchClient::new(client, config.api_url.clone(), tokens);

        Ok(Self::new(search_client, Arc::new(MockValidationProvider)))
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
