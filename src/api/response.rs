//! Response types for the payroll API.
//!
//! This module defines the error response structures, the payroll response
//! envelope, and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{PayrollRow, PayrollTotals};

/// Body of every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Stable machine-readable code, e.g. `INVALID_NET`.
    pub code: String,
    /// Message suitable for showing to a user.
    pub message: String,
    /// Hint on how to fix the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Correlation id of the request, matching the server logs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<Uuid>,
}

impl ApiError {
    /// Creates an error with a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            correlation_id: None,
        }
    }

    /// Adds a hint.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Tags the error with the request's correlation id.
    pub fn for_request(mut self, correlation_id: Uuid) -> Self {
        self.correlation_id = Some(correlation_id);
        self
    }

    /// A required field was missing from the request body.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// The request body was not valid JSON or had a wrongly typed field.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// An [`ApiError`] paired with the status it is sent with.
pub struct ApiErrorResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Response body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with its status.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }

    /// Tags the body with the request's correlation id.
    pub fn for_request(self, correlation_id: Uuid) -> Self {
        Self {
            status: self.status,
            error: self.error.for_request(correlation_id),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidAmount { .. } => ApiErrorResponse::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("INVALID_AMOUNT", message),
            ),
            EngineError::InvalidRate { .. } => ApiErrorResponse::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("INVALID_RATE", message)
                    .with_details("A configured rate is outside the range 0 to 1"),
            ),
            EngineError::InvalidGross { .. } => ApiErrorResponse::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("INVALID_GROSS", message),
            ),
            EngineError::InvalidNet { .. } => ApiErrorResponse::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("INVALID_NET", message),
            ),
            EngineError::AmountTooLarge { .. } => ApiErrorResponse::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("AMOUNT_TOO_LARGE", message),
            ),
            EngineError::ConvergenceFailure { .. } => ApiErrorResponse::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("CONVERGENCE_FAILURE", message)
                    .with_details("Try a smaller net salary or check the income tax brackets"),
            ),
            EngineError::InvalidConfig { field, .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_CONFIG", message)
                    .with_details(format!("Fix '{}' in the supplied configuration", field)),
            ),
            // Only the server's own configuration is ever loaded from disk.
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("CONFIG_ERROR", "Server configuration is unavailable")
                        .with_details(message),
                )
            }
        }
    }
}

/// Response body for `POST /payroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// One row per employee, in request order.
    pub rows: Vec<PayrollRow>,
    /// Column totals over the rows that computed.
    pub totals: PayrollTotals,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_optional_fields_are_omitted() {
        let body = serde_json::to_value(ApiError::new("INVALID_NET", "bad net")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "code": "INVALID_NET", "message": "bad net" })
        );
    }

    #[test]
    fn test_builders_fill_optional_fields() {
        let id = Uuid::new_v4();
        let error = ApiError::malformed_json("bad body")
            .with_details("check the quotes")
            .for_request(id);

        assert_eq!(error.code, "MALFORMED_JSON");
        assert_eq!(error.details.as_deref(), Some("check the quotes"));
        assert_eq!(error.correlation_id, Some(id));
    }

    #[test]
    fn test_invalid_net_maps_to_unprocessable() {
        let api_error: ApiErrorResponse = EngineError::InvalidNet { net: Decimal::ZERO }.into();
        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.error.code, "INVALID_NET");
        assert_eq!(api_error.error.message, "Net salary must be positive, got 0");
    }

    #[test]
    fn test_amount_too_large_maps_to_unprocessable() {
        let api_error: ApiErrorResponse = EngineError::AmountTooLarge {
            amount: Decimal::MAX,
        }
        .into();
        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.error.code, "AMOUNT_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_into_response_carries_status_and_body() {
        let id = Uuid::new_v4();
        let response = ApiErrorResponse::from(EngineError::InvalidNet { net: Decimal::ZERO })
            .for_request(id)
            .into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_NET");
        assert_eq!(error.correlation_id, Some(id));
    }

    #[test]
    fn test_convergence_failure_maps_to_unprocessable() {
        let api_error: ApiErrorResponse = EngineError::ConvergenceFailure {
            target_net: Decimal::from(10_000_000),
            iterations: 100,
        }
        .into();
        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.error.code, "CONVERGENCE_FAILURE");
    }

    #[test]
    fn test_invalid_config_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidConfig {
            field: "sgk_ceiling".to_string(),
            message: "must be positive, got 0".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_CONFIG");
        assert!(api_error.error.details.unwrap().contains("sgk_ceiling"));
    }

    #[test]
    fn test_config_not_found_maps_to_server_error() {
        let api_error: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "/missing.yaml".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}
