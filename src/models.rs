use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An artist as returned to our callers, independent of the upstream shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistRecord {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
    pub followers: u64,
    pub genres: Vec<String>,
    pub popularity: u8,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchSuccess {
    pub success: bool,
    pub artists: Vec<ArtistRecord>,
    pub count: usize,
    pub query: String,
    pub timestamp: DateTime<Utc>,
}

impl SearchSuccess {
    pub fn new(query: String, artists: Vec<ArtistRecord>) -> Self {
        Self {
            success: true,
            count: artists.len(),
            artists,
            query,
            timestamp: Utc::now(),
        }
    }
}

/// Body of every `success: false` response.
#[derive(Debug, Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl FailureResponse {
    pub fn new(error: String) -> Self {
        Self {
            success: false,
            error,
            details: None,
            kind: None,
            example: None,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ValidationRequest {
    pub artist1: Option<String>,
    pub artist2: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    pub success: bool,
    pub artist1: String,
    pub artist2: String,
    pub is_valid: bool,
    pub confidence: f64,
    pub source: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub uptime: f64,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub search: String,
    pub validate: String,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub success: bool,
    pub message: String,
    pub version: String,
    pub status: String,
    pub timestamp: DateTime<Utc>,
}
