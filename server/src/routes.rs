//! HTTP handlers for the enrollment and admin API.
//!
//! Responses follow the `{"success": …}` envelope the front-end was
//! built against; error mappings live in [`crate::error`].

use crate::error::{ApiError, ApiResult};
use crate::{notify, validate, AppState};
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use cohort_model::{to_csv, EnrollmentStats};
use cohort_types::{EnrollmentKind, Plan};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

const DEFAULT_PAGE_LIMIT: usize = 50;

/// Body of `POST /api/enrollments`. Everything is optional at the serde
/// level; [`validate::validate_create`] owns the required-field checks
/// so missing fields produce envelope errors instead of rejections.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnrollmentRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub motivation: Option<String>,
    #[serde(default, rename = "enrollmentType")]
    pub kind: Option<EnrollmentKind>,
    #[serde(default, rename = "selectedPlan")]
    pub plan: Option<Plan>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// Body of `PUT /api/enrollments/{email}/transaction`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransactionRequest {
    #[serde(default)]
    pub transaction_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    limit: Option<String>,
    offset: Option<String>,
}

pub async fn create_enrollment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> ApiResult<impl IntoResponse> {
    let req: CreateEnrollmentRequest =
        serde_json::from_value(body).map_err(|e| ApiError::Validation(e.to_string()))?;
    let new = validate::validate_create(req, client_ip(&headers), user_agent(&headers))?;

    let record = state.store.create(new).await?;
    info!("New enrollment stored: {} ({})", record.email, record.kind);
    notify::notify_created(&record);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Enrollment created successfully",
            "enrollmentId": record.id,
            "data": {
                "name": record.name,
                "email": record.email,
                "enrollmentType": record.kind,
                "selectedPlan": record.plan,
            },
        })),
    ))
}

pub async fn get_enrollment(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<Value>> {
    let record = state
        .store
        .find_by_email(&email)
        .await?
        .ok_or(ApiError::NotFound(email))?;
    Ok(Json(json!({ "success": true, "data": record })))
}

pub async fn update_transaction(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let req: UpdateTransactionRequest =
        serde_json::from_value(body).map_err(|e| ApiError::Validation(e.to_string()))?;
    let transaction_id = validate::validate_transaction_id(req.transaction_id)?;

    let record = state.store.attach_transaction(&email, &transaction_id).await?;
    info!("Transaction attached: {} - {}", record.email, transaction_id);
    notify::notify_payment(&record);

    Ok(Json(json!({
        "success": true,
        "message": "Transaction updated successfully",
    })))
}

pub async fn list_enrollments(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Value>> {
    let limit = parse_or(query.limit.as_deref(), DEFAULT_PAGE_LIMIT);
    let offset = parse_or(query.offset.as_deref(), 0);

    let records = state.store.list_all().await?;
    let page: Vec<_> = records.into_iter().skip(offset).take(limit).collect();

    Ok(Json(json!({
        "success": true,
        "data": page,
        "pagination": { "limit": limit, "offset": offset },
    })))
}

pub async fn clear_enrollments(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    state.store.clear_all().await?;
    info!("All enrollment data cleared");
    Ok(Json(json!({
        "success": true,
        "message": "All enrollment data cleared",
    })))
}

pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let records = state.store.list_all().await?;
    let stats = EnrollmentStats::compute(&records, Utc::now());
    Ok(Json(json!({ "success": true, "data": stats })))
}

pub async fn export_csv(State(state): State<AppState>) -> ApiResult<Response> {
    let records = state.store.list_all().await?;
    let csv = to_csv(&records);
    let filename = format!("enrollments_{}.csv", Utc::now().format("%Y-%m-%d"));

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    )
        .into_response())
}

pub async fn get_plans() -> Json<Value> {
    Json(json!({ "success": true, "data": cohort_model::CATALOG }))
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "message": "Cohort enrollment service is running",
    }))
}

fn parse_or(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|v| v.parse().ok()).unwrap_or(default)
}

/// Client IP as reported by the reverse proxy. Direct connections
/// without forwarding headers yield `None`.
fn client_ip(headers: &HeaderMap) -> Option<String> {
    header_value(headers, "x-forwarded-for")
        .and_then(|v| v.split(',').next().map(|ip| ip.trim().to_string()))
        .filter(|ip| !ip.is_empty())
        .or_else(|| header_value(headers, "x-real-ip"))
}

fn user_agent(headers: &HeaderMap) -> Option<String> {
    header_value(headers, "user-agent")
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn client_ip_prefers_first_forwarded_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );
        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.2"));
        assert_eq!(client_ip(&headers).as_deref(), Some("203.0.113.7"));
    }

    #[test]
    fn client_ip_falls_back_to_real_ip_then_none() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.2"));
        assert_eq!(client_ip(&headers).as_deref(), Some("10.0.0.2"));

        assert_eq!(client_ip(&HeaderMap::new()), None);
    }

    #[test]
    fn pagination_parses_leniently() {
        assert_eq!(parse_or(Some("25"), 50), 25);
        assert_eq!(parse_or(Some("abc"), 50), 50);
        assert_eq!(parse_or(None, 50), 50);
    }
}
