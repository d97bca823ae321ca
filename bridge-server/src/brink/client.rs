//! Brink SOAP client
//!
//! One client per process: shared HTTP client, per-service endpoints
//! and an explicit semaphore capping concurrent outbound POS calls.

use std::sync::Arc;

use chrono::NaiveDate;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{PosEmployee, PosOrder, ShiftRecord};
use tokio::sync::Semaphore;

use crate::core::Config;

use super::{parse, soap};

/// Per-request Brink credentials, proxied verbatim from the caller
#[derive(Debug, Clone)]
pub struct BrinkCredentials {
    pub access_token: String,
    pub location_token: String,
}

/// Client for the three Brink SOAP services
#[derive(Clone)]
pub struct BrinkClient {
    http: reqwest::Client,
    sales_url: String,
    labor_url: String,
    settings_url: String,
    /// Cap on concurrent outbound POS calls across all requests
    limiter: Arc<Semaphore>,
}

impl BrinkClient {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            sales_url: config.brink_sales_url.clone(),
            labor_url: config.brink_labor_url.clone(),
            settings_url: config.brink_settings_url.clone(),
            limiter: Arc::new(Semaphore::new(config.brink_max_concurrency)),
        }
    }

    /// Fetch and parse the day's orders from the Sales service
    pub async fn get_orders(
        &self,
        creds: &BrinkCredentials,
        business_date: NaiveDate,
    ) -> AppResult<Vec<PosOrder>> {
        let body = soap::get_orders_body(business_date, None);
        let response = self
            .call(&self.sales_url, soap::ACTION_GET_ORDERS, creds, body)
            .await?;
        parse::parse_orders(&response)
    }

    /// Fetch and parse the day's shifts from the Labor service
    pub async fn get_shifts(
        &self,
        creds: &BrinkCredentials,
        business_date: NaiveDate,
    ) -> AppResult<Vec<ShiftRecord>> {
        let body = soap::get_shifts_body(business_date);
        let response = self
            .call(&self.labor_url, soap::ACTION_GET_SHIFTS, creds, body)
            .await?;
        parse::parse_shifts(&response)
    }

    /// Fetch and parse the active employee roster from the Settings
    /// service
    pub async fn get_employees(&self, creds: &BrinkCredentials) -> AppResult<Vec<PosEmployee>> {
        let body = soap::get_employees_body();
        let response = self
            .call(&self.settings_url, soap::ACTION_GET_EMPLOYEES, creds, body)
            .await?;
        parse::parse_employees(&response)
    }

    /// Issue one SOAP POST and normalize transport failures into typed
    /// upstream errors. HTTP errors and non-zero ResultCodes both
    /// surface as protocol errors carrying the upstream detail.
    async fn call(
        &self,
        url: &str,
        action: &str,
        creds: &BrinkCredentials,
        body: String,
    ) -> AppResult<String> {
        let _permit = self
            .limiter
            .acquire()
            .await
            .map_err(|_| AppError::internal("POS call limiter closed"))?;

        let response = self
            .http
            .post(url)
            .header("AccessToken", creds.access_token.as_str())
            .header("LocationToken", creds.location_token.as_str())
            .header("SOAPAction", action)
            .header(reqwest::header::CONTENT_TYPE, "text/xml; charset=utf-8")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::pos_timeout(format!("POS call timed out: {action}"))
                } else {
                    AppError::pos_unavailable(format!("POS call failed: {e}"))
                }
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::pos_unavailable(format!("POS response read failed: {e}")))?;

        if !status.is_success() {
            return Err(AppError::with_message(
                ErrorCode::PosProtocolError,
                format!("POS returned HTTP {status}"),
            )
            .with_detail("httpStatus", status.as_u16()));
        }

        soap::check_result(&text)?;
        Ok(text)
    }
}
