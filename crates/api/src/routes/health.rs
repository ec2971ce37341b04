//! Health check and service info endpoints.

use axum::{Json, Router, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Time the check was answered.
    pub timestamp: DateTime<Utc>,
    /// Service version.
    pub version: &'static str,
}

/// Service info response.
#[derive(Serialize)]
pub struct ServiceInfo {
    /// Greeting.
    pub message: &'static str,
    /// Time the request was answered.
    pub timestamp: DateTime<Utc>,
    /// Path of the health endpoint.
    pub health: &'static str,
}

/// Health check handler.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Service info handler.
pub(crate) async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "SAC Simulator API is running",
        timestamp: Utc::now(),
        health: "/api/sac/health",
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
