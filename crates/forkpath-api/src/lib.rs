//! Forkpath API — HTTP presentation adapter.
//!
//! Hosts one in-process session and renders its display payloads as JSON.
//! The adapter has no narrative logic of its own.

pub mod assets;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the full application router.
pub fn app(state: AppState) -> Router {
    // TODO: Replace CorsLayer::permissive() with origins read from Config.
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/session", routes::session::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
