//! SOAP envelope construction and result checking for Brink services
//!
//! Envelopes carry only the fields the downstream parsers need: the
//! business date, and for orders an optional modified-time cursor.
//! The business date always goes out as `YYYY-MM-DD`.

use chrono::{NaiveDate, NaiveDateTime};
use shared::error::{AppError, AppResult};

use super::xml;

/// SOAPAction header values, one per remote operation
pub const ACTION_GET_ORDERS: &str =
    "http://www.brinksoftware.com/webservices/sales/v2/ISalesWebService2/GetOrders";
pub const ACTION_GET_SHIFTS: &str =
    "http://www.brinksoftware.com/webservices/labor/v2/ILaborWebService2/GetShifts";
pub const ACTION_GET_EMPLOYEES: &str =
    "http://www.brinksoftware.com/webservices/settings/v2/ISettingsWebService2/GetEmployees";

const SALES_NS: &str = "http://www.brinksoftware.com/webservices/sales/v2";
const LABOR_NS: &str = "http://www.brinksoftware.com/webservices/labor/v2";
const SETTINGS_NS: &str = "http://www.brinksoftware.com/webservices/settings/v2";

fn envelope(body: &str) -> String {
    format!(
        r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body>{body}</s:Body></s:Envelope>"#
    )
}

/// GetOrders request body: business date plus an optional
/// modified-time cursor for incremental pulls
pub fn get_orders_body(business_date: NaiveDate, modified_since: Option<NaiveDateTime>) -> String {
    let cursor = modified_since
        .map(|t| format!("<ModifiedTime>{}</ModifiedTime>", t.format("%Y-%m-%dT%H:%M:%S")))
        .unwrap_or_default();
    envelope(&format!(
        r#"<GetOrders xmlns="{SALES_NS}"><request><BusinessDate>{}</BusinessDate>{cursor}</request></GetOrders>"#,
        business_date.format("%Y-%m-%d"),
    ))
}

/// GetShifts request body
pub fn get_shifts_body(business_date: NaiveDate) -> String {
    envelope(&format!(
        r#"<GetShifts xmlns="{LABOR_NS}"><request><BusinessDate>{}</BusinessDate></request></GetShifts>"#,
        business_date.format("%Y-%m-%d"),
    ))
}

/// GetEmployees request body (no parameters; the location is implied
/// by the transport headers)
pub fn get_employees_body() -> String {
    envelope(&format!(
        r#"<GetEmployees xmlns="{SETTINGS_NS}"><request/></GetEmployees>"#
    ))
}

/// Check the Brink `<ResultCode>` embedded in a response body.
///
/// Non-zero codes become a typed upstream error carrying the code and
/// the `<Message>` text verbatim. A missing ResultCode is treated as
/// success and left to the parsers.
pub fn check_result(body: &str) -> AppResult<()> {
    let code = xml::extract_scalar(body, "ResultCode")?
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(0);
    if code == 0 {
        return Ok(());
    }
    let message = xml::extract_scalar(body, "Message")?
        .unwrap_or_else(|| "POS rejected the request".to_string());
    Err(AppError::pos_protocol(code, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_orders_body_minimal() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let body = get_orders_body(date, None);
        assert!(body.contains("<BusinessDate>2024-01-15</BusinessDate>"));
        assert!(body.contains("<GetOrders"));
        assert!(!body.contains("<ModifiedTime>"));
        assert!(body.starts_with("<s:Envelope"));
    }

    #[test]
    fn test_orders_body_with_cursor() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let since = date.and_hms_opt(17, 45, 0).unwrap();
        let body = get_orders_body(date, Some(since));
        assert!(body.contains("<ModifiedTime>2024-01-15T17:45:00</ModifiedTime>"));
    }

    #[test]
    fn test_shifts_body() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let body = get_shifts_body(date);
        assert!(body.contains("<GetShifts"));
        assert!(body.contains("<BusinessDate>2024-01-15</BusinessDate>"));
    }

    #[test]
    fn test_check_result_success() {
        assert!(check_result("<Response><ResultCode>0</ResultCode></Response>").is_ok());
        // No ResultCode at all reads as success
        assert!(check_result("<Response><Orders/></Response>").is_ok());
    }

    #[test]
    fn test_check_result_failure_carries_code_and_message() {
        let body =
            "<Response><ResultCode>101</ResultCode><Message>Invalid location token</Message></Response>";
        let err = check_result(body).unwrap_err();
        assert_eq!(err.code, ErrorCode::PosProtocolError);
        assert_eq!(err.message, "Invalid location token");
        assert_eq!(err.details.unwrap().get("resultCode").unwrap(), 101);
    }
}
