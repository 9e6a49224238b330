//! HTTP request handlers for the billing API.
//!
//! This module contains the handler for the `/calculate` endpoint. The
//! engine is a pure function of the request body: the caller hands over
//! the month's input collections, the handler runs the computation and
//! returns the summary. Nothing is persisted, so the router carries no
//! state.

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::billing::bill_month;
use crate::feed::InMemorySnapshot;

use super::request::BillingRequest;
use super::response::{ApiError, ApiErrorResponse};

/// Creates the API router with all endpoints.
pub fn create_router() -> Router {
    Router::new().route("/calculate", post(calculate_handler))
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a billing request and returns the computed monthly summary.
async fn calculate_handler(
    payload: Result<Json<BillingRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing billing request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {err}"))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let month = match request.billing_month() {
        Ok(month) => month,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid billing month");
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };
    let scope = request.scope();
    let source = InMemorySnapshot::new(request.into_snapshot());

    match bill_month(&source, month, &scope) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                month = %month,
                household_count = summary.totals.household_count,
                total_amount = %summary.totals.total_amount,
                duration_us = summary.duration_us,
                "Billing completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(summary),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Billing failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
