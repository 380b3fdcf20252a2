//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::borrow::Cow;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{SolverOptions, calculate_payroll, gross_from_net_with, net_from_gross};
use crate::config::TaxConfiguration;
use crate::error::{EngineError, EngineResult};
use crate::models::PayrollEntry;

use super::request::{GrossFromNetRequest, NetFromGrossRequest, PayrollRequest};
use super::response::{ApiError, ApiErrorResponse, PayrollResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/net-from-gross", post(net_from_gross_handler))
        .route("/gross-from-net", post(gross_from_net_handler))
        .route("/payroll", post(payroll_handler))
        .route("/config", get(config_handler))
        .with_state(state)
}

/// Handler for POST /net-from-gross.
///
/// Returns the full salary breakdown for a gross salary.
async fn net_from_gross_handler(
    State(state): State<AppState>,
    payload: Result<Json<NetFromGrossRequest>, JsonRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing net-from-gross request");

    let Json(request) = payload.map_err(|rejection| rejected(rejection, correlation_id))?;
    let config =
        resolve_config(&state, request.config).map_err(|err| failed(err, correlation_id))?;

    let start_time = Instant::now();
    let result =
        net_from_gross(request.gross, &config).map_err(|err| failed(err, correlation_id))?;
    info!(
        correlation_id = %correlation_id,
        gross = %result.gross,
        net = %result.net,
        duration_us = start_time.elapsed().as_micros(),
        "Net salary calculated"
    );
    Ok(json_response(&result))
}

/// Handler for POST /gross-from-net.
///
/// Searches for the gross salary that yields the requested net.
async fn gross_from_net_handler(
    State(state): State<AppState>,
    payload: Result<Json<GrossFromNetRequest>, JsonRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing gross-from-net request");

    let Json(request) = payload.map_err(|rejection| rejected(rejection, correlation_id))?;
    let config =
        resolve_config(&state, request.config).map_err(|err| failed(err, correlation_id))?;

    let options = SolverOptions::with_strategy(request.strategy);
    let start_time = Instant::now();
    let result = gross_from_net_with(request.net, &config, &options)
        .map_err(|err| failed(err, correlation_id))?;
    info!(
        correlation_id = %correlation_id,
        net = %result.net,
        gross = %result.gross,
        strategy = ?options.strategy,
        duration_us = start_time.elapsed().as_micros(),
        "Gross salary found"
    );
    Ok(json_response(&result))
}

/// Handler for POST /payroll.
///
/// Computes a payroll sheet. Employees whose salary cannot be computed are
/// reported on their row; the request as a whole still succeeds.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let Json(request) = payload.map_err(|rejection| rejected(rejection, correlation_id))?;
    let config =
        resolve_config(&state, request.config).map_err(|err| failed(err, correlation_id))?;

    let entries: Vec<PayrollEntry> = request.employees.into_iter().map(Into::into).collect();
    let options = SolverOptions::with_strategy(request.strategy);

    let start_time = Instant::now();
    let sheet = calculate_payroll(&entries, &config, &options);
    let failed_rows = sheet.rows.iter().filter(|row| row.error.is_some()).count();
    if failed_rows > 0 {
        warn!(
            correlation_id = %correlation_id,
            failed_rows,
            "Some payroll rows could not be calculated"
        );
    }
    info!(
        correlation_id = %correlation_id,
        employees = entries.len(),
        total_cost = %sheet.totals.total_cost,
        duration_us = start_time.elapsed().as_micros(),
        "Payroll calculated"
    );

    Ok(json_response(&PayrollResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        rows: sheet.rows,
        totals: sheet.totals,
    }))
}

/// Handler for GET /config.
///
/// Returns the configuration the server applies by default.
async fn config_handler(State(state): State<AppState>) -> Response {
    json_response(state.config())
}

/// Picks the request's configuration when present, after validating it,
/// and the server's otherwise.
fn resolve_config(
    state: &AppState,
    supplied: Option<TaxConfiguration>,
) -> EngineResult<Cow<'_, TaxConfiguration>> {
    match supplied {
        Some(config) => {
            config.validate()?;
            Ok(Cow::Owned(config))
        }
        None => Ok(Cow::Borrowed(state.config())),
    }
}

fn json_response<T: Serialize>(body: &T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn failed(err: EngineError, correlation_id: Uuid) -> ApiErrorResponse {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    ApiErrorResponse::from(err).for_request(correlation_id)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejected(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error.for_request(correlation_id))
}
