// Error type returned by HTTP handlers
use crate::domain::error::DomainError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Domain(domain) => match domain {
                DomainError::DeviceNotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", domain.to_string()),
                DomainError::UnknownMetric(_) => (StatusCode::NOT_FOUND, "UNKNOWN_METRIC", domain.to_string()),
                DomainError::Calibration(_) => (StatusCode::CONFLICT, "CALIBRATION_ERROR", domain.to_string()),
                DomainError::UnknownCondition(_) | DomainError::InvalidPatient(_) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", domain.to_string())
                }
                DomainError::InvalidThresholds(_) | DomainError::Series(_) => {
                    tracing::error!(error = %domain, "Invalid service configuration");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        if status.is_client_error() {
            tracing::warn!(%status, "Rejected request: {}", message);
        }

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
