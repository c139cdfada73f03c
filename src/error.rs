use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::FailureResponse;
use crate::search::SEARCH_EXAMPLE;

/// Problems with the process configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing SPOTIFY_CLIENT_ID or SPOTIFY_CLIENT_SECRET")]
    MissingCredentials,

    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Failures of the client-credentials exchange.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("token request failed: {0}")]
    Network(String),

    #[error("token endpoint returned status {0}")]
    UpstreamStatus(u16),

    #[error("unreadable token response: {0}")]
    Decode(String),

    /// The token endpoint answered without an `access_token`.
    #[error("missing credentials")]
    MissingCredentials,
}

/// Why a credential could not be produced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("could not authenticate: {0}")]
    Token(#[from] TokenError),

    #[error("search request failed: {0}")]
    Network(String),

    #[error("upstream status {0}")]
    UpstreamStatus(u16),

    #[error("unreadable search response: {0}")]
    Decode(String),
}

impl SearchError {
    /// Short label for the failure category, safe to show to callers.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::Token(TokenError::Config(_)) => "config",
            SearchError::Token(TokenError::Auth(_)) => "auth",
            _ => "search",
        }
    }
}

/// Errors surfaced at the request boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Query parameter q is required with at least 2 characters")]
    InvalidQuery,

    #[error("Parameters artist1 and artist2 are required")]
    MissingArtists,

    /// The request could not be extracted (bad JSON, wrong content type, malformed query).
    #[error("Invalid request")]
    Rejected { status: StatusCode, message: String },

    #[error("Failed to search artists")]
    Search(#[from] SearchError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidQuery | ApiError::MissingArtists => StatusCode::BAD_REQUEST,
            ApiError::Rejected { status, .. } => *status,
            ApiError::Search(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the structured `success: false` body for this error.
    pub fn to_failure(&self) -> FailureResponse {
        let mut failure = FailureResponse::new(self.to_string());
        match self {
            ApiError::InvalidQuery => {
                failure.example = Some(SEARCH_EXAMPLE.to_string());
            }
            ApiError::MissingArtists => {}
            ApiError::Rejected { message, .. } => {
                failure.details = Some(message.clone());
            }
            ApiError::Search(source) => {
                failure.details = Some(source.to_string());
                failure.kind = Some(source.kind().to_string());
            }
        }
        failure
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_failure())).into_response()
    }
}
