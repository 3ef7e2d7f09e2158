//! HTTP request handlers for the attendance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_shift_hours, generate_report, summarize_employee};
use crate::error::EngineError;

use super::request::{HoursRequest, ReportRequest, SummaryRequest, into_domain};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/hours", post(hours_handler))
        .route("/summary", post(summary_handler))
        .route("/report", post(report_handler))
        .with_state(state)
}

/// Handler for POST /hours.
///
/// Splits one shift's clock times into worked and overtime hours using the
/// configured standard shift length.
async fn hours_handler(
    State(state): State<AppState>,
    payload: Result<Json<HoursRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing hours request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let policy = state.config().shift_policy();
    let mut result = calculate_shift_hours(
        request.entry_time,
        request.exit_time,
        policy.standard_hours,
        1,
    );
    result.audit_step.policy_ref = policy.policy_ref.clone();

    info!(
        correlation_id = %correlation_id,
        worked_hours = %result.worked_hours,
        overtime_hours = %result.overtime_hours,
        crosses_midnight = result.crosses_midnight,
        "Hours calculated"
    );
    json_response(StatusCode::OK, &result)
}

/// Handler for POST /summary.
///
/// Summarises one employee's approved attendance over the requested period.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let period = request.period();
    let config = state.config();
    let result = into_domain(
        request.employees,
        request.records,
        &config.organisation().default_production_unit,
        config.standard_shift_hours(),
    )
    .and_then(|(employees, records)| {
        summarize_employee(&request.employee_id, period, &employees, &records)
    });

    match result {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %summary.employee_id,
                days_attended = summary.days_attended,
                days_expected = summary.days_expected,
                total_worked_hours = %summary.total_worked_hours,
                duration_us = start_time.elapsed().as_micros(),
                "Summary completed successfully"
            );
            json_response(StatusCode::OK, &summary)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /report.
///
/// Builds the grouped attendance report for active employees matching the
/// requested area and production unit.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let period = request.period();
    let filters = request.filters();
    let config = state.config();
    let result = into_domain(
        request.employees,
        request.records,
        &config.organisation().default_production_unit,
        config.standard_shift_hours(),
    )
    .map(|(employees, records)| generate_report(period, &filters, &employees, &records));

    match result {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                total_employees = report.totals.total_employees,
                total_hours_worked = %report.totals.total_hours_worked,
                duration_us = start_time.elapsed().as_micros(),
                "Report completed successfully"
            );
            json_response(StatusCode::OK, &report)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, &api_error.error)
}

/// Maps a JSON extraction failure onto a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
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
    json_response(StatusCode::BAD_REQUEST, &error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::ShiftHoursResult;
    use crate::config::ConfigLoader;
    use crate::models::PeriodSummary;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/joygardens").expect("Failed to load config");
        AppState::new(config)
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    async fn post(uri: &str, body: impl Into<Body>) -> axum::response::Response {
        create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(body.into())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> axum::body::Bytes {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_hours_endpoint_splits_overtime() {
        let response = post("/hours", r#"{"entry_time":"08:00:00","exit_time":"14:30:00"}"#).await;
        assert_eq!(response.status(), StatusCode::OK);

        let result: ShiftHoursResult = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(result.worked_hours, dec("6"));
        assert_eq!(result.overtime_hours, dec("0.5"));
        assert_eq!(result.audit_step.policy_ref, "joygardens_standard_shift");
    }

    #[tokio::test]
    async fn test_hours_endpoint_missing_exit_is_zero() {
        let response = post("/hours", r#"{"entry_time":"08:00:00"}"#).await;
        assert_eq!(response.status(), StatusCode::OK);

        let result: ShiftHoursResult = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(result.worked_hours, Decimal::ZERO);
        assert_eq!(result.overtime_hours, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let response = post("/hours", "{ invalid json }").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let response = post("/summary", r#"{"start_date":"2026-01-12","end_date":"2026-01-18"}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("employee_id"));
    }

    #[tokio::test]
    async fn test_summary_unknown_employee_returns_404() {
        let body = r#"{
            "employee_id": "emp_404",
            "start_date": "2026-01-12",
            "end_date": "2026-01-18",
            "employees": [],
            "records": []
        }"#;
        let response = post("/summary", body).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "EMPLOYEE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_summary_computes_missing_record_hours() {
        let body = r#"{
            "employee_id": "emp_001",
            "start_date": "2026-01-12",
            "end_date": "2026-01-18",
            "employees": [{
                "id": "emp_001",
                "national_id": "1712345678",
                "first_names": "Ana",
                "last_names": "Paredes",
                "area": "Production",
                "hire_date": "2022-05-05"
            }],
            "records": [{
                "id": "rec_001",
                "employee_id": "emp_001",
                "date": "2026-01-12",
                "entry_time": "22:00:00",
                "exit_time": "05:00:00",
                "approval_state": "approved"
            }]
        }"#;
        let response = post("/summary", body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let summary: PeriodSummary = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(summary.total_worked_hours, dec("6.00"));
        assert_eq!(summary.total_overtime_hours, dec("1.00"));
        assert_eq!(summary.days_attended, 1);
        assert_eq!(summary.days_missed, 5);
    }

    #[tokio::test]
    async fn test_duplicate_records_return_409() {
        let record = r#"{
            "id": "rec_001",
            "employee_id": "emp_001",
            "date": "2026-01-12",
            "entry_time": "08:00:00",
            "exit_time": "12:00:00"
        }"#;
        let body = format!(
            r#"{{"start_date":"2026-01-12","end_date":"2026-01-18","records":[{},{}]}}"#,
            record, record
        );
        let response = post("/report", body).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "DUPLICATE_RECORD");
    }
}
