//! SAC simulation routes.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use sac_core::amortization::{SimulationRequest, SimulationResult, schedule_to_csv};
use sac_shared::{AppError, AppResult};
use tracing::{error, info, warn};

use crate::AppState;
use crate::error::{ApiError, ApiResult};

/// Creates the simulation routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/simulate", post(simulate))
        .route("/export", post(export_csv))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Unwraps the JSON body, reporting malformed input as a validation error.
fn parse_request(
    payload: Result<Json<SimulationRequest>, JsonRejection>,
) -> ApiResult<SimulationRequest> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Malformed SAC simulation request");
            Err(rejection.into())
        }
    }
}

/// Runs the calculator and logs the outcome.
fn run_simulation(state: &AppState, request: &SimulationRequest) -> AppResult<SimulationResult> {
    info!(
        financed_amount = %request.financed_amount,
        annual_interest_rate_percent = %request.annual_interest_rate_percent,
        installment_count = request.installment_count,
        "Starting SAC simulation"
    );

    let result = state.calculator.compute(request).map_err(|e| {
        let err = AppError::from(e);
        if err.is_client_error() {
            warn!(error = %err, "Invalid SAC simulation parameters");
        } else {
            error!(error = %err, "SAC simulation failed");
        }
        err
    })?;

    info!(total_interest = %result.total_interest, "SAC simulation completed");
    Ok(result)
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /api/sac/simulate
async fn simulate(
    State(state): State<AppState>,
    payload: Result<Json<SimulationRequest>, JsonRejection>,
) -> ApiResult<Json<SimulationResult>> {
    let request = parse_request(payload)?;
    let result = run_simulation(&state, &request)?;
    Ok(Json(result))
}

/// POST /api/sac/export
///
/// Returns the schedule as a CSV attachment.
async fn export_csv(
    State(state): State<AppState>,
    payload: Result<Json<SimulationRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let request = parse_request(payload)?;
    let result = run_simulation(&state, &request)?;

    let body = schedule_to_csv(&result).map_err(|e| {
        error!(error = %e, "Failed to export SAC schedule");
        ApiError::from(e)
    })?;

    let filename = format!("sac_schedule_{}.csv", Utc::now().timestamp_millis());
    Ok((
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    ))
}
