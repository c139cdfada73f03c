use crate::error::ApiError;
use crate::models::{
    Endpoints, HealthResponse, RootResponse, SearchParams, SearchSuccess, ValidationRequest,
    ValidationResponse,
};
use crate::search;
use crate::state::AppState;
use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use chrono::Utc;
use std::sync::Arc;

pub const SERVICE_NAME: &str = "RapGame Backend";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        success: true,
        message: SERVICE_NAME.to_string(),
        version: VERSION.to_string(),
        status: "running".to_string(),
        timestamp: Utc::now(),
    })
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
        version: VERSION.to_string(),
        timestamp: Utc::now(),
        uptime: state.uptime().as_secs_f64(),
        endpoints: Endpoints {
            search: "/api/search".to_string(),
            validate: "/api/validate".to_string(),
        },
    })
}

pub async fn search_artists(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchSuccess>, ApiError> {
    let Query(params) = params?;
    search::search_artists(&state.search_client, params.q.as_deref())
        .await
        .map(Json)
}

pub async fn validate_collaboration(
    State(state): State<Arc<AppState>>,
    request: Result<Json<ValidationRequest>, JsonRejection>,
) -> Result<Json<ValidationResponse>, ApiError> {
    let Json(request) = request?;
    let required = |name: Option<String>| {
        name.map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
    };

    let (Some(artist1), Some(artist2)) = (required(request.artist1), required(request.artist2))
    else {
        return Err(ApiError::MissingArtists);
    };

    tracing::info!(artist1 = %artist1, artist2 = %artist2, "validating collaboration");

    let verdict = state.validator.validate(&artist1, &artist2);

    Ok(Json(ValidationResponse {
        success: true,
        artist1,
        artist2,
        is_valid: verdict.is_valid,
        confidence: verdict.confidence,
        source: state.validator.source().to_string(),
        timestamp: Utc::now(),
    }))
}
