//! API route definitions.

use axum::{Router, http::Uri, routing::get};
use sac_shared::AppError;

use crate::{AppState, error::ApiError};

pub mod health;
pub mod simulation;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    let sac_routes = Router::new()
        .merge(health::routes())
        .merge(simulation::routes());

    Router::new()
        .route("/api", get(health::service_info))
        .nest("/api/sac", sac_routes)
}

/// Fallback for unknown paths when no front-end is served.
pub async fn not_found(uri: Uri) -> ApiError {
    AppError::NotFound(format!("No route for {}", uri.path())).into()
}
