//! Dashboard API handlers
//!
//! Both endpoints take the Brink credentials as query parameters and
//! fail fast on missing tokens or an unknown location before any
//! upstream call goes out. Upstream failures after that point degrade
//! to partial data, never to a request failure.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::{ClockedInEmployee, DashboardReport, Location};

use crate::brink::BrinkCredentials;
use crate::core::AppState;
use crate::report::pipeline;

use super::ApiResult;

/// Query parameters shared by the dashboard endpoints
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    #[serde(rename = "locationToken")]
    pub location_token: Option<String>,
    #[serde(rename = "accessToken")]
    pub access_token: Option<String>,
    /// Business date override (YYYY-MM-DD); resolved from the
    /// location's clock when omitted
    #[serde(rename = "businessDate")]
    pub business_date: Option<String>,
}

/// Validate credentials and resolve the location, before anything
/// upstream is attempted
fn resolve_request(
    state: &AppState,
    query: &DashboardQuery,
) -> Result<(Arc<Location>, BrinkCredentials), AppError> {
    let location_token = query
        .location_token
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::required_field("locationToken"))?;
    let access_token = query
        .access_token
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::required_field("accessToken"))?;

    let location = state
        .locations
        .resolve(location_token)
        .ok_or_else(AppError::location_not_found)?;

    Ok((
        location,
        BrinkCredentials {
            access_token: access_token.to_string(),
            location_token: location_token.to_string(),
        },
    ))
}

fn parse_business_date(raw: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    raw.map(|d| {
        NaiveDate::parse_from_str(d, "%Y-%m-%d").map_err(|_| {
            AppError::with_message(
                ErrorCode::ReportDateInvalid,
                format!("Invalid business date: {d}, expected YYYY-MM-DD"),
            )
        })
    })
    .transpose()
}

/// GET /api/dashboard?locationToken=&accessToken=&businessDate=
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<DashboardReport> {
    let (location, creds) = resolve_request(&state, &query)?;
    let business_date = parse_business_date(query.business_date.as_deref())?;

    let report =
        pipeline::build_dashboard_report(&state, &location, &creds, business_date).await?;
    Ok(Json(report))
}

/// GET /api/dashboard/clocked-in?locationToken=&accessToken=
pub async fn get_clocked_in(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<Vec<ClockedInEmployee>> {
    let (location, creds) = resolve_request(&state, &query)?;

    let active = pipeline::build_clocked_in(&state, &location, &creds).await?;
    Ok(Json(active))
}
