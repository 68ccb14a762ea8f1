//! Response types for the Shift Summary Calculator API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::CalculatorError;
use crate::logo::FALLBACK_HEADING;

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

    /// Creates an unknown field error response.
    pub fn unknown_field(name: &str) -> Self {
        Self::with_details(
            "UNKNOWN_FIELD",
            format!("Unknown field: {}", name),
            format!("'{}' is not one of the shift form fields", name),
        )
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

impl From<CalculatorError> for ApiErrorResponse {
    fn from(error: CalculatorError) -> Self {
        match error {
            CalculatorError::UnknownField { name } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::unknown_field(&name),
            },
            CalculatorError::InvalidFieldValue { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_FIELD_VALUE", error.to_string()),
            },
            CalculatorError::LogoUnavailable { .. } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "LOGO_UNAVAILABLE",
                    error.to_string(),
                    FALLBACK_HEADING,
                ),
            },
            CalculatorError::ConfigNotFound { .. }
            | CalculatorError::ConfigParseError { .. }
            | CalculatorError::InvalidRegistry { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", error.to_string()),
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
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_unknown_field_maps_to_bad_request() {
        let api_error: ApiErrorResponse = CalculatorError::UnknownField {
            name: "mileage".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "UNKNOWN_FIELD");
        assert!(api_error.error.message.contains("mileage"));
    }

    #[test]
    fn test_logo_unavailable_maps_to_bad_gateway() {
        let api_error: ApiErrorResponse = CalculatorError::LogoUnavailable {
            url: "http://localhost/logo.jpg".to_string(),
            attempts: 3,
            message: "timed out".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_GATEWAY);
        assert_eq!(api_error.error.code, "LOGO_UNAVAILABLE");
        assert_eq!(
            api_error.error.message,
            "Couldn't load image from 'http://localhost/logo.jpg' after 3 attempts: timed out"
        );
        assert_eq!(api_error.error.details.as_deref(), Some(FALLBACK_HEADING));
    }

    #[test]
    fn test_config_errors_map_to_internal_error() {
        let api_error: ApiErrorResponse = CalculatorError::InvalidRegistry {
            message: "missing fields: tips".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
        assert_eq!(
            api_error.error.details.as_deref(),
            Some("Invalid field registry: missing fields: tips")
        );
    }
}
