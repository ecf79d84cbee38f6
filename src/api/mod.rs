//! HTTP endpoint exposing the search dispatcher
//!
//! - `GET /api/search/:provider?keyword=...` returns a JSON array of songs
//! - `GET /api/providers` lists registered provider names
//! - `GET /health` reports liveness

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::core::search::KaraokeSearchService;
use crate::core::song::Song;
use crate::error::KaraokeError;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub search: KaraokeSearchService,
}

impl AppState {
    pub fn new(search: KaraokeSearchService) -> Self {
        Self { search }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/search/:provider", get(search))
        .route("/api/providers", get(providers))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Query parameters for a catalog search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Forwarded verbatim to the provider
    pub keyword: String,
}

/// GET /api/search/:provider?keyword=...
pub async fn search(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Song>>, ApiError> {
    let songs = state.search.search(&provider, &query.keyword).await?;
    Ok(Json(songs))
}

/// GET /api/providers
pub async fn providers(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.search.providers())
}

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[derive(Debug)]
pub enum ApiError {
    UnsupportedProvider(String),
    Internal(String),
}

impl From<KaraokeError> for ApiError {
    fn from(err: KaraokeError) -> Self {
        match err {
            KaraokeError::UnsupportedProvider { .. } => ApiError::UnsupportedProvider(err.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::UnsupportedProvider(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal(message) => {
                error!("Search request failed: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
