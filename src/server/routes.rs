//! HTTP route handlers
//!
//! The scrape endpoint accepts the target URL either as a query parameter
//! (GET) or in a JSON body (POST). Input validation happens here, before any
//! fetch is attempted; a crawl that cannot be persisted is reported as a
//! server error and its partial aggregation is discarded.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::crawler::{CrawlEngine, CrawlResult};
use crate::server::AppState;
use crate::storage::SnapshotStore;

/// Parameters accepted by the scrape endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ScrapeParams {
    pub url: Option<String>,
    pub max_links: Option<usize>,
}

/// Successful scrape response body
#[derive(Debug, Serialize)]
pub struct ScrapeResponse {
    #[serde(flatten)]
    pub result: CrawlResult,
    pub saved_to_file: String,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// GET /scrape with the target URL as a query parameter
pub async fn scrape_get(
    State(state): State<AppState>,
    Query(params): Query<ScrapeParams>,
) -> Response {
    handle_scrape(state, params).await
}

/// POST /scrape with a JSON body; a missing or malformed body is treated the
/// same as a missing URL
pub async fn scrape_post(
    State(state): State<AppState>,
    body: Option<Json<ScrapeParams>>,
) -> Response {
    let params = body.map(|Json(p)| p).unwrap_or_default();
    handle_scrape(state, params).await
}

/// GET /health liveness probe
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn handle_scrape(state: AppState, params: ScrapeParams) -> Response {
    let url = match params.url.as_deref().map(str::trim) {
        Some(u) if !u.is_empty() => u.to_string(),
        _ => {
            tracing::error!("No URL provided");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("URL is required")),
            )
                .into_response();
        }
    };

    let seed = match Url::parse(&url) {
        Ok(seed) => seed,
        Err(e) => {
            tracing::error!("Rejecting malformed URL {:?}: {}", url, e);
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(format!("Invalid URL: {}", e))),
            )
                .into_response();
        }
    };

    let max_links = params.max_links.unwrap_or(state.config.crawler.max_links);
    tracing::info!("Received scrape request for {}", seed);

    let engine = CrawlEngine::new(state.client.clone(), max_links);
    let result = engine.run(&seed).await;

    match state.store.save(&result) {
        Ok(path) => {
            tracing::info!("Scrape completed for {}", result.url);
            (
                StatusCode::OK,
                Json(ScrapeResponse {
                    result,
                    saved_to_file: path.display().to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to persist snapshot for {}: {}", result.url, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    }
}
