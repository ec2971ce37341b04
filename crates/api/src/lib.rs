//! HTTP API layer with Axum routes for SAC simulations.
//!
//! This crate provides:
//! - REST API routes (simulate, CSV export, health)
//! - Error-to-response mapping
//! - Optional static serving of the web front-end

pub mod error;
pub mod routes;

use axum::Router;
use sac_core::amortization::{SacCalculator, ScheduleCalculator};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Stateless schedule calculator.
    pub calculator: Arc<dyn ScheduleCalculator>,
}

impl AppState {
    /// Creates state around the given calculator.
    #[must_use]
    pub fn new(calculator: Arc<dyn ScheduleCalculator>) -> Self {
        Self { calculator }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(SacCalculator::new()))
    }
}

/// Creates the main application router.
///
/// When `static_dir` is set, unmatched paths are served from that directory.
pub fn create_router(state: AppState, static_dir: Option<&str>) -> Router {
    let router = Router::new().merge(routes::api_routes());

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router.fallback(routes::not_found),
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
