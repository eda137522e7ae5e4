//! HTTP request handlers for the Ponto Engine API.
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
use chrono::{Datelike, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{PayrollOptions, compute_monthly_payroll};
use crate::error::{EngineError, EngineResult};
use crate::models::PayrollEnvelope;
use crate::report::build_monthly_report;

use super::request::{PayrollRequest, ReportRequest};
use super::response::{ApiError, ApiErrorResponse, ReportResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll", post(payroll_handler))
        .route("/report", post(report_handler))
        .with_state(state)
}

/// Handler for POST /payroll.
///
/// Accepts an employee and their punch records and returns the monthly
/// payroll wrapped in a [`PayrollEnvelope`].
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let years = request.calendar_years(Utc::now().year());
    let result =
        payroll_options(&state, &request, &years).and_then(|options| run_payroll(&request, &options));

    match result {
        Ok(envelope) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %envelope.employee_id,
                days_count = request.days.len(),
                gross = %envelope.payroll.pays.total_gross,
                duration_us = envelope.duration_us,
                "Payroll completed successfully"
            );
            json_response(StatusCode::OK, &envelope)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /report.
///
/// Computes the payroll for the requested month and returns it together
/// with the month's timesheet.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let mut request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let (year, month) = (request.year, request.month);
    let received = request.payroll.days.len();
    request
        .payroll
        .days
        .retain(|day| day.date.year() == year && day.date.month() == month);
    let skipped = received - request.payroll.days.len();
    if skipped > 0 {
        warn!(
            correlation_id = %correlation_id,
            skipped,
            year,
            month,
            "Ignoring days outside the report month"
        );
    }

    let result = payroll_options(&state, &request.payroll, &[year]).and_then(|options| {
        let envelope = run_payroll(&request.payroll, &options)?;
        let employee = &request.payroll.employee;
        let store = request
            .store
            .as_deref()
            .or(employee.store.as_deref())
            .unwrap_or_default();
        let report = build_monthly_report(
            employee,
            store,
            year,
            month,
            &request.payroll.days,
            &options.holidays,
            &envelope.payroll,
        )?;
        Ok(ReportResponse { envelope, report })
    });

    match result {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %response.envelope.employee_id,
                file_name = %response.report.file_name,
                total_worked = %response.report.total_worked,
                "Report completed successfully"
            );
            json_response(StatusCode::OK, &response)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Builds the payroll options for a request: the configured policy with the
/// holidays of every year in `years`, the request's extra holidays and its
/// overrides.
fn payroll_options(
    state: &AppState,
    request: &PayrollRequest,
    years: &[i32],
) -> EngineResult<PayrollOptions> {
    let (extra, rejected) = request.extra_holidays();
    if let Some(date) = rejected.first() {
        return Err(EngineError::invalid_argument(
            "regional_holidays",
            format!("'{}' is not a valid holiday date", date),
        ));
    }

    let config = state.config();
    let (&first, rest) = years
        .split_first()
        .ok_or_else(|| EngineError::invalid_argument("days", "no calendar year to apply"))?;
    let mut options = config.payroll_options(first);
    for &year in rest {
        options.holidays.extend(config.calendar(year, Vec::new()).entries().cloned());
    }
    options.holidays.extend(extra);
    request.overrides.apply(&mut options);
    Ok(options)
}

/// Runs the monthly calculation and wraps the result with its metadata.
fn run_payroll(request: &PayrollRequest, options: &PayrollOptions) -> EngineResult<PayrollEnvelope> {
    let start_time = Instant::now();
    let payroll = compute_monthly_payroll(&request.days, request.employee.base_salary, options)?;
    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(PayrollEnvelope {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: request.employee.id.clone(),
        payroll,
        duration_us,
    })
}

/// Maps a JSON extraction failure to a 400 response.
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

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    ApiErrorResponse::from(err).into_response()
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::report::MonthlyReport;
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/ponto").expect("Failed to load config");
        AppState::new(config)
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn valid_payroll_body() -> serde_json::Value {
        serde_json::json!({
            "employee": { "id": "func_001", "name": "Ana Souza", "base_salary": "2200" },
            "days": [
                {
                    "date": "2025-10-06",
                    "entrada": "08:00",
                    "intervaloSaida": "12:00",
                    "intervaloVolta": "13:00",
                    "saida": "18:00"
                }
            ]
        })
    }

    async fn post(uri: &str, body: String) -> Response {
        create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_valid_payroll_request_returns_200() {
        let response = post("/payroll", valid_payroll_body().to_string()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let envelope: PayrollEnvelope = read_json(response).await;
        assert_eq!(envelope.employee_id, "func_001");
        assert_eq!(envelope.engine_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(envelope.payroll.totals.worked, 540);
        assert_eq!(envelope.payroll.totals.normal, 440);
        assert_eq!(envelope.payroll.totals.extra50, 100);
        assert_eq!(envelope.payroll.rates.hourly, dec("10"));
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let response = post("/payroll", "{invalid json".to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_base_salary_returns_validation_error() {
        let body = r#"{ "employee": { "id": "func_001" }, "days": [] }"#;
        let response = post("/payroll", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("base_salary"));
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400() {
        let response = create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/payroll")
                    .body(Body::from(valid_payroll_body().to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_non_positive_salary_returns_invalid_argument() {
        let mut body = valid_payroll_body();
        body["employee"]["base_salary"] = serde_json::json!("0");
        let response = post("/payroll", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "INVALID_ARGUMENT");
    }

    #[tokio::test]
    async fn test_malformed_punch_returns_400() {
        let mut body = valid_payroll_body();
        body["days"][0]["saida"] = serde_json::json!("18h");
        let response = post("/payroll", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "MALFORMED_TIME");
    }

    #[tokio::test]
    async fn test_request_regional_holiday_applies_override() {
        let mut body = valid_payroll_body();
        body["regional_holidays"] = serde_json::json!([{ "date": "06/10", "name": "Aniversário" }]);
        let response = post("/payroll", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let envelope: PayrollEnvelope = read_json(response).await;
        let day = &envelope.payroll.per_day[0];
        assert!(day.is_holiday);
        assert_eq!(day.holiday_name.as_deref(), Some("Aniversário"));
        assert_eq!(day.normal_minutes, 0);
        assert_eq!(day.extra100_minutes, 540);
    }

    #[tokio::test]
    async fn test_bad_regional_holiday_returns_invalid_argument() {
        let mut body = valid_payroll_body();
        body["regional_holidays"] = serde_json::json!([{ "date": "31/02" }]);
        let response = post("/payroll", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "INVALID_ARGUMENT");
        assert!(error.message.contains("31/02"));
    }

    #[tokio::test]
    async fn test_report_returns_timesheet_and_payroll() {
        let mut body = valid_payroll_body();
        body["year"] = serde_json::json!(2025);
        body["month"] = serde_json::json!(10);
        body["store"] = serde_json::json!("Loja Centro");
        let response = post("/report", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response: ReportResponse = read_json(response).await;
        let report: MonthlyReport = response.report;
        assert_eq!(report.rows.len(), 31);
        assert_eq!(report.store, "Loja Centro");
        assert_eq!(report.total_worked, "9h 0m");
        assert_eq!(report.file_name, "Relatorio_Outubro2025_ana_souza.pdf");
        assert!(report.holidays.iter().any(|h| h.date == "12/10/2025"));
        assert_eq!(response.envelope.payroll.totals.worked, 540);
    }

    #[tokio::test]
    async fn test_report_ignores_days_outside_month() {
        let mut body = valid_payroll_body();
        body["days"]
            .as_array_mut()
            .unwrap()
            .push(serde_json::json!({ "date": "2025-11-03", "entrada": "08:00", "saida": "12:00" }));
        body["year"] = serde_json::json!(2025);
        body["month"] = serde_json::json!(10);
        let response = post("/report", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response: ReportResponse = read_json(response).await;
        assert_eq!(response.envelope.payroll.per_day.len(), 1);
        assert_eq!(response.report.total_worked_minutes, 540);
    }

    #[tokio::test]
    async fn test_report_invalid_month_returns_400() {
        let mut body = valid_payroll_body();
        body["year"] = serde_json::json!(2025);
        body["month"] = serde_json::json!(13);
        let response = post("/report", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "INVALID_ARGUMENT");
    }
}
