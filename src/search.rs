use crate::error::ApiError;
use crate::models::SearchSuccess;
use crate::spotify::SearchClient;

pub const MIN_QUERY_LENGTH: usize = 2;
pub const SEARCH_EXAMPLE: &str = "/api/search?q=Drake";

/// A trimmed search term of at least [`MIN_QUERY_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        let trimmed = raw.trim();
        if trimmed.chars().count() < MIN_QUERY_LENGTH {
            return Err(ApiError::InvalidQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Validates `raw_query`, runs the catalog search and wraps the results.
/// Rejected queries never reach the network.
pub async fn search_artists(
    client: &SearchClient,
    raw_query: Option<&str>,
) -> Result<SearchSuccess, ApiError> {
    let query = SearchQuery::parse(raw_query.unwrap_or_default())?;

    tracing::info!(query = query.as_str(), "searching artists");

    match client.search(query.as_str()).await {
        Ok(artists) => Ok(SearchSuccess::new(query.into_inner(), artists)),
        Err(e) => {
            tracing::error!(kind = e.kind(), error = %e, "artist search failed");
            Err(e.into())
        }
    }
}
