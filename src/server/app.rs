//! Axum application setup
//!
//! Creates the health endpoint router with the allowed-host guard applied.

use crate::config::Settings;
use axum::{Router, middleware, routing::get};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Application settings
    pub settings: Arc<Settings>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

/// Create the Axum application with routes and middleware
pub fn create_app(settings: Settings) -> Router {
    let state = AppState {
        settings: Arc::new(settings),
        start_time: std::time::Instant::now(),
    };

    Router::new()
        .route("/ping", get(super::handlers::ping))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    super::handlers::enforce_allowed_hosts,
                )),
        )
        .with_state(state)
}
