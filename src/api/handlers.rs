//! HTTP request handlers for the Shift Summary Calculator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{coerce_input, summarize_shift};
use crate::models::FieldSpec;

use super::request::SummaryRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/summary", post(summary_handler))
        .route("/fields", get(fields_handler))
        .route("/logo", get(logo_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for POST /summary.
///
/// Coerces the submitted form values and returns the shift summary.
async fn summary_handler(
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let fields = match request.into_fields() {
        Ok(fields) => fields,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected summary request");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let start_time = Instant::now();
    let input = coerce_input(fields.iter().map(|(field, value)| (*field, value)));
    let summary = summarize_shift(input);

    info!(
        correlation_id = %correlation_id,
        summary_id = %summary.id,
        fields_submitted = fields.len(),
        gross_takings = summary.result.gross_takings,
        total_pay_in = summary.result.total_pay_gst,
        duration_us = start_time.elapsed().as_micros(),
        "Summary calculated"
    );

    (StatusCode::OK, Json(summary)).into_response()
}

/// Handler for GET /fields.
async fn fields_handler(State(state): State<AppState>) -> Json<Vec<FieldSpec>> {
    Json(state.registry().fields().cloned().collect())
}

/// Handler for GET /logo.
///
/// Serves the cached logo, or 502 with the fallback heading in the details.
async fn logo_handler(State(state): State<AppState>) -> Response {
    match state.logo().fetch_cached(state.logo_url()).await {
        Ok(image) => {
            let content_type = image
                .content_type
                .clone()
                .unwrap_or_else(|| "application/octet-stream".to_string());
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, content_type)],
                image.bytes.clone(),
            )
                .into_response()
        }
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for GET /health.
async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
