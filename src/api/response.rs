//! Response types for the billing API.
//!
//! This module defines the error response structures and the mapping from
//! engine errors to HTTP statuses. The mapping keeps the caller able to
//! distinguish "valid zero" (a 200 with zero totals) from "computation
//! failed" (a 4xx/5xx with a structured error body).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidMonth { year, month } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_MONTH",
                    format!("Invalid billing month: {year}-{month}"),
                    "The month must be between 1 and 12",
                ),
            },
            EngineError::MissingPricingConfig => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "No active pricing configuration",
                    "Exactly one active pricing record covering 1-5 weekdays is required",
                ),
            },
            EngineError::AmbiguousPricingConfig { count } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Ambiguous pricing configuration",
                    format!("{count} active pricing records cover 1-5 weekdays, expected exactly one"),
                ),
            },
            EngineError::HouseholdNotFound { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "HOUSEHOLD_NOT_FOUND",
                    format!("Household not found: {id}"),
                    "The requested household id is not present in the billing data",
                ),
            },
            EngineError::DataFetch { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("DATA_FETCH_ERROR", "Data fetch failed", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_month_maps_to_400() {
        let engine_error = EngineError::InvalidMonth {
            year: 2025,
            month: 13,
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_MONTH");
    }

    #[test]
    fn test_missing_config_maps_to_500() {
        let api_error: ApiErrorResponse = EngineError::MissingPricingConfig.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_ambiguous_config_maps_to_500() {
        let api_error: ApiErrorResponse = EngineError::AmbiguousPricingConfig { count: 3 }.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
        assert!(api_error.error.details.unwrap().contains('3'));
    }

    #[test]
    fn test_household_not_found_maps_to_400() {
        let api_error: ApiErrorResponse = EngineError::HouseholdNotFound {
            id: "fam_042".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "HOUSEHOLD_NOT_FOUND");
        assert!(api_error.error.message.contains("fam_042"));
    }

    #[test]
    fn test_data_fetch_maps_to_500() {
        let api_error: ApiErrorResponse = EngineError::DataFetch {
            message: "storage offline".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "DATA_FETCH_ERROR");
    }
}
