//! HTTP API for Contact-Sweep
//!
//! A small axum service exposing the crawl as `GET|POST /scrape` plus a
//! health probe. The scrape routes sit behind the API-key check and a per-IP
//! rate limit; CORS and request tracing wrap the whole router. Each request
//! runs its own crawl with its own state, so concurrent requests are
//! independent.

mod auth;
mod routes;

pub use routes::{health, scrape_get, scrape_post, ErrorResponse, ScrapeParams, ScrapeResponse};

use crate::config::Config;
use crate::crawler::build_http_client;
use crate::storage::JsonSnapshotStore;
use axum::http::HeaderValue;
use axum::middleware;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::SmartIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: reqwest::Client,
    pub store: Arc<JsonSnapshotStore>,
}

/// Builds the shared state from a validated configuration
pub fn build_state(config: Config) -> crate::Result<AppState> {
    let client = build_http_client(
        &config.crawler.user_agent,
        config.crawler.request_timeout_secs,
    )?;
    let store = Arc::new(JsonSnapshotStore::new(&config.output.data_dir));
    Ok(AppState {
        config: Arc::new(config),
        client,
        store,
    })
}

/// Builds the API router
///
/// The rate limit and API-key check apply to the scrape routes only; the
/// health probe stays open. CORS and tracing wrap everything.
pub fn build_router(state: AppState) -> Router {
    let rate = state.config.server.rate_limit_per_minute;
    let rate_limit_config = Arc::new(
        GovernorConfigBuilder::default()
            .period(Duration::from_secs(60) / rate)
            .burst_size(rate)
            // Clients keyed by forwarded-for headers first, peer address second
            .key_extractor(SmartIpKeyExtractor)
            .use_headers()
            .finish()
            .expect("rate limiter configuration is valid and should never fail"),
    );

    let cors = CorsLayer::new()
        .allow_origin(allow_origin(&state.config.server.cors_origin))
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/scrape", get(scrape_get).post(scrape_post))
        .layer(GovernorLayer {
            config: rate_limit_config,
        })
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ))
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn allow_origin(configured: &str) -> AllowOrigin {
    if configured == "*" {
        return AllowOrigin::any();
    }
    match configured.parse::<HeaderValue>() {
        Ok(origin) => AllowOrigin::exact(origin),
        Err(e) => {
            tracing::warn!(
                "Invalid cors-origin {:?} ({}), falling back to any origin",
                configured,
                e
            );
            AllowOrigin::any()
        }
    }
}

/// Binds the listener and serves the API until the process exits
pub async fn serve(config: Config) -> crate::Result<()> {
    let bind_address = config.server.bind_address.clone();
    let state = build_state(config)?;
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Contact-Sweep API listening on {}", bind_address);

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
