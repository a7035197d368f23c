//! dreamscape-server library root.
//!
//! Exposes the router and service so integration tests can drive them
//! in-process without binding a port.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod service;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/generate-reports", post(routes::reports::generate_reports))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
