//! Mapping of application errors to HTTP responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sac_core::amortization::{AmortizationError, ExportError};
use sac_shared::AppError;
use serde_json::json;

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Handler error rendered as `{"error": CODE, "message": text}`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// Returns the HTTP status of this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<AmortizationError> for ApiError {
    fn from(err: AmortizationError) -> Self {
        Self(err.into())
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        Self(AppError::Internal(err.to_string()))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(json!({
                "error": self.0.error_code(),
                "message": self.0.public_message(),
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_response() {
        let response = ApiError::from(AmortizationError::NonPositiveAmount).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert_eq!(body["message"], "Financed amount must be greater than zero.");
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response = ApiError::from(AmortizationError::ArithmeticOverflow).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "INTERNAL_ERROR");
        assert_eq!(body["message"], "Internal server error");
    }

    #[test]
    fn test_not_found_status() {
        let err = ApiError::from(AppError::NotFound("/nope".into()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
