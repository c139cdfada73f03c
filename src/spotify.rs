use std::sync::Arc;

use reqwest::Client;
use serde::Deserialize;

use crate::error::SearchError;
use crate::models::ArtistRecord;
use crate::token_cache::TokenCache;

pub const SEARCH_LIMIT: usize = 10;

#[derive(Debug, Deserialize)]
pub struct SpotifySearchResponse {
    pub artists: Option<SpotifyArtistPage>,
}

#[derive(Debug, Deserialize)]
pub struct SpotifyArtistPage {
    #[serde(default)]
    pub items: Vec<SpotifyArtist>,
}

#[derive(Debug, Deserialize)]
pub struct SpotifyArtist {
    pub id: String,
    pub name: String,
    pub images: Option<Vec<SpotifyImage>>,
    pub followers: Option<SpotifyFollowers>,
    pub genres: Option<Vec<String>>,
    pub popularity: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SpotifyImage {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct SpotifyFollowers {
    pub total: Option<u64>,
}

impl From<SpotifyArtist> for ArtistRecord {
    fn from(artist: SpotifyArtist) -> Self {
        let image_url = artist
            .images
            .and_then(|images| images.into_iter().next())
            .map(|image| image.url);

        ArtistRecord {
            id: artist.id,
            name: artist.name,
            image_url,
            followers: artist
                .followers
                .and_then(|followers| followers.total)
                .unwrap_or_default(),
            genres: artist.genres.unwrap_or_default(),
            popularity: artist.popularity.unwrap_or_default().min(100) as u8,
        }
    }
}

/// Maps an upstream search body to our records, keeping upstream order.
/// A body without an `artists` container means no matches.
pub fn normalize_search_response(response: SpotifySearchResponse) -> Vec<ArtistRecord> {
    response
        .artists
        .map(|page| page.items.into_iter().map(ArtistRecord::from).collect())
        .unwrap_or_default()
}

#[derive(Clone)]
pub struct SearchClient {
    client: Client,
    api_url: String,
    tokens: Arc<TokenCache>,
}

impl SearchClient {
    pub fn new(client: Client, api_url: String, tokens: Arc<TokenCache>) -> Self {
        Self {
            client,
            api_url,
            tokens,
        }
    }

    /// Searches the catalog for artists. Expects an already trimmed, non-empty query.
    pub async fn search(&self, query: &str) -> Result<Vec<ArtistRecord>, SearchError> {
        let credential = self.tokens.get_token().await?;

        let url = format!(
            "{}/v1/search?q={}&type=artist&limit={}",
            self.api_url,
            urlencoding::encode(query),
            SEARCH_LIMIT
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(credential.token())
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::UpstreamStatus(status.as_u16()));
        }

        let body: SpotifySearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Decode(e.to_string()))?;

        Ok(normalize_search_response(body))
    }
}
