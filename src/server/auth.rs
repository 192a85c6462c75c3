//! API key middleware
//!
//! Requests to protected routes must carry an `x-api-key` header matching one
//! of the configured keys. With no keys configured the check is disabled,
//! which is the local development mode.

use axum::extract::{ConnectInfo, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::net::SocketAddr;

use crate::server::routes::ErrorResponse;
use crate::server::AppState;

pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let keys = &state.config.server.api_keys;
    if keys.is_empty() {
        return next.run(request).await;
    }

    let provided = request
        .headers()
        .get("x-api-key")
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(key) if keys.iter().any(|k| k == key) => next.run(request).await,
        _ => {
            tracing::warn!(
                "Unauthorized access attempt from {}",
                client_addr(&request)
            );
            (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new("Invalid or missing API key")),
            )
                .into_response()
        }
    }
}

/// Best-effort client address for the log; tests drive the router without a
/// real connection, so this may be absent
fn client_addr(request: &Request) -> String {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ci| ci.0.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
