//! HTTP request handlers
//!
//! The health endpoint and the allowed-host guard.

use crate::{server::app::AppState, utils::version};
use axum::{
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

/// Ping response for health checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResponse {
    /// Server uptime in seconds
    pub server_uptime: u64,
    /// Server version
    pub version: String,
    /// Whether debug mode is on
    pub debug: bool,
}

/// Error response for rejected requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Health check endpoint
///
/// GET /ping
pub async fn ping(State(state): State<AppState>) -> Json<PingResponse> {
    let uptime = state.start_time.elapsed().as_secs();

    tracing::debug!(
        "Ping response: uptime={}s, version={}",
        uptime,
        version::get_version()
    );
    Json(PingResponse {
        server_uptime: uptime,
        version: version::get_version().to_string(),
        debug: state.settings.debug,
    })
}

/// Reject requests whose `Host` is not in the allowed hosts
pub async fn enforce_allowed_hosts(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .or_else(|| request.uri().authority().map(|a| a.as_str().to_string()));

    match host {
        Some(host) if state.settings.allowed_hosts.is_allowed(&host) => next.run(request).await,
        Some(host) => {
            tracing::warn!("Rejected request for disallowed host {:?}", host);
            let message = if state.settings.debug {
                format!(
                    "Invalid HTTP_HOST header: {:?}. You may need to add it to ALLOWED_HOSTS.",
                    host
                )
            } else {
                "Invalid HTTP_HOST header".to_string()
            };
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
        }
        None => {
            tracing::warn!("Rejected request without a Host header");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Missing Host header")),
            )
                .into_response()
        }
    }
}
