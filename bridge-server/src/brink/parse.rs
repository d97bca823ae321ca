//! Brink response parsers
//!
//! Pure XML -> record transforms: no I/O, deterministic for identical
//! input. One malformed element is skipped with a warning; the rest of
//! the document still parses.

use chrono::{DateTime, NaiveDateTime, Utc};
use shared::error::AppResult;
use shared::models::{Payment, PaymentDetail, PosEmployee, PosOrder, ShiftRecord};

use super::xml;

/// Parse a UTC timestamp in the forms Brink emits: RFC 3339, or a bare
/// datetime with optional fractional seconds.
pub(crate) fn parse_utc(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(value) {
        return Some(t.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(t) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(t.and_utc());
        }
    }
    None
}

// ==================== Orders ====================

/// Parse a GetOrders response body into order records.
///
/// Zero/negative totals are incomplete or test data and are dropped
/// here so they never reach aggregation.
pub fn parse_orders(body: &str) -> AppResult<Vec<PosOrder>> {
    let mut orders = Vec::new();
    for block in xml::extract_repeated(body, "Order")? {
        match parse_order(&block) {
            Some(order) if order.total > 0.0 => orders.push(order),
            Some(order) => {
                tracing::debug!(order_id = %order.id, total = order.total, "Dropping non-positive-total order");
            }
            None => tracing::warn!("Skipping malformed <Order> element"),
        }
    }
    Ok(orders)
}

fn parse_order(block: &str) -> Option<PosOrder> {
    let id = xml::extract_scalar(block, "Id").ok().flatten()?;
    let total = xml::scalar_f64(block, "Total")?;
    let number = xml::extract_scalar(block, "Number")
        .ok()
        .flatten()
        .unwrap_or_default();
    let name = xml::extract_scalar(block, "Name")
        .ok()
        .flatten()
        .unwrap_or_default();
    let first_send_time = xml::extract_scalar(block, "FirstSendTime")
        .ok()
        .flatten()
        .and_then(|v| parse_utc(&v));

    Some(PosOrder {
        id,
        number,
        total,
        name,
        first_send_time,
        payments: parse_payments(block),
    })
}

fn parse_payments(order_block: &str) -> Vec<Payment> {
    let Ok(blocks) = xml::extract_repeated(order_block, "Payment") else {
        return Vec::new();
    };
    blocks
        .iter()
        .filter_map(|b| {
            let payment = parse_payment(b);
            if payment.is_none() {
                tracing::warn!("Skipping malformed <Payment> element");
            }
            payment
        })
        .collect()
}

fn parse_payment(block: &str) -> Option<Payment> {
    let id = xml::extract_scalar(block, "Id").ok().flatten()?;
    let details = xml::extract_repeated(block, "PaymentDetail")
        .map(|blocks| {
            blocks
                .iter()
                .filter_map(|d| parse_payment_detail(d))
                .collect()
        })
        .unwrap_or_default();

    Some(Payment {
        id,
        amount: xml::scalar_f64(block, "Amount").unwrap_or(0.0),
        tender_id: xml::extract_scalar(block, "TenderId")
            .ok()
            .flatten()
            .unwrap_or_default(),
        tip_amount: xml::scalar_f64(block, "TipAmount").unwrap_or(0.0),
        employee_id: xml::extract_scalar(block, "EmployeeId")
            .ok()
            .flatten()
            .unwrap_or_default(),
        till_number: xml::extract_scalar(block, "TillNumber")
            .ok()
            .flatten()
            .unwrap_or_default(),
        details,
    })
}

fn parse_payment_detail(block: &str) -> Option<PaymentDetail> {
    let id = xml::extract_scalar(block, "Id").ok().flatten()?;
    Some(PaymentDetail {
        id,
        amount: xml::scalar_f64(block, "Amount").unwrap_or(0.0),
        tip_amount: xml::scalar_f64(block, "TipAmount").unwrap_or(0.0),
    })
}

// ==================== Shifts ====================

/// Parse a GetShifts response body into shift records.
///
/// Closed shifts with no worked minutes are dropped; open shifts
/// (no clock-out punch) are kept for the clocked-in view and excluded
/// from labor bucketing by their zero minutes.
pub fn parse_shifts(body: &str) -> AppResult<Vec<ShiftRecord>> {
    let mut shifts = Vec::new();
    for block in xml::extract_repeated(body, "Shift")? {
        match parse_shift(&block) {
            Some(shift) if shift.clock_out.is_some() && shift.minutes_worked <= 0 => {
                tracing::debug!(employee_id = %shift.employee_id, "Dropping zero-length closed shift");
            }
            Some(shift) => shifts.push(shift),
            None => tracing::warn!("Skipping malformed <Shift> element"),
        }
    }
    Ok(shifts)
}

fn parse_shift(block: &str) -> Option<ShiftRecord> {
    let employee_id = xml::extract_scalar(block, "EmployeeId").ok().flatten()?;
    let clock_in = xml::extract_scalar(block, "ClockInTime")
        .ok()
        .flatten()
        .and_then(|v| parse_utc(&v))?;
    let clock_out = xml::extract_scalar(block, "ClockOutTime")
        .ok()
        .flatten()
        .and_then(|v| parse_utc(&v));

    // Prefer the POS-reported minutes; fall back to the punch pair.
    let minutes_worked = xml::scalar_i64(block, "MinutesWorked")
        .or_else(|| clock_out.map(|out| (out - clock_in).num_minutes()))
        .unwrap_or(0);

    Some(ShiftRecord {
        employee_id,
        clock_in,
        clock_out,
        minutes_worked,
        pay_rate: xml::scalar_f64(block, "PayRate").unwrap_or(0.0),
        business_date: xml::extract_scalar(block, "BusinessDate")
            .ok()
            .flatten()
            .unwrap_or_default(),
    })
}

// ==================== Employees ====================

/// Parse a GetEmployees response body into roster records.
///
/// Only active employees are kept; terminated records would otherwise
/// shadow pay rates for reused job codes.
pub fn parse_employees(body: &str) -> AppResult<Vec<PosEmployee>> {
    let mut employees = Vec::new();
    for block in xml::extract_repeated(body, "Employee")? {
        match parse_employee(&block) {
            Some((employee, true)) => employees.push(employee),
            Some((employee, false)) => {
                tracing::debug!(employee_id = %employee.id, "Dropping inactive employee");
            }
            None => tracing::warn!("Skipping malformed <Employee> element"),
        }
    }
    Ok(employees)
}

fn parse_employee(block: &str) -> Option<(PosEmployee, bool)> {
    let id = xml::extract_scalar(block, "Id").ok().flatten()?;
    let active = xml::extract_scalar(block, "Active")
        .ok()
        .flatten()
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    // First assigned job carries the job-type rate override.
    let job = xml::extract_repeated(block, "Job")
        .ok()
        .and_then(|jobs| jobs.into_iter().next());
    let job_code_id = job
        .as_deref()
        .and_then(|j| xml::extract_scalar(j, "Id").ok().flatten());
    let job_type_pay_rate = job
        .as_deref()
        .and_then(|j| xml::scalar_f64(j, "PayRate"))
        .unwrap_or(0.0);

    let employee = PosEmployee {
        id,
        first_name: xml::extract_scalar(block, "FirstName")
            .ok()
            .flatten()
            .unwrap_or_default(),
        last_name: xml::extract_scalar(block, "LastName")
            .ok()
            .flatten()
            .unwrap_or_default(),
        job_code_id,
        pay_rate: xml::scalar_f64(block, "PayRate").unwrap_or(0.0),
        job_type_pay_rate,
    };
    Some((employee, active))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const ORDERS_XML: &str = r#"
        <GetOrdersResult><ResultCode>0</ResultCode><Orders>
            <Order>
                <Id>9001</Id><Number>101</Number><Name>DriveThru</Name>
                <Total>42.50</Total>
                <FirstSendTime>2024-01-15T18:00:00Z</FirstSendTime>
                <Payments>
                    <Payment>
                        <Id>p1</Id><Amount>42.50</Amount><TenderId>2</TenderId>
                        <TipAmount>3.00</TipAmount><EmployeeId>88</EmployeeId><TillNumber>1</TillNumber>
                        <Details>
                            <PaymentDetail><Id>d1</Id><Amount>20.00</Amount><TipAmount>1.50</TipAmount></PaymentDetail>
                        </Details>
                    </Payment>
                </Payments>
            </Order>
            <Order>
                <Id>9002</Id><Number>102</Number><Name>Void</Name>
                <Total>0.00</Total>
                <FirstSendTime>2024-01-15T18:05:00Z</FirstSendTime>
            </Order>
            <Order><Number>103</Number><Total>oops</Total></Order>
        </Orders></GetOrdersResult>"#;

    #[test]
    fn test_parse_orders_filters_and_shapes() {
        let orders = parse_orders(ORDERS_XML).unwrap();
        // Zero-total and malformed orders are dropped
        assert_eq!(orders.len(), 1);

        let order = &orders[0];
        assert_eq!(order.id, "9001");
        assert_eq!(order.number, "101");
        assert_eq!(order.total, 42.50);
        assert_eq!(
            order.first_send_time,
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 18, 0, 0).unwrap())
        );

        assert_eq!(order.payments.len(), 1);
        let payment = &order.payments[0];
        assert_eq!(payment.tip_amount, 3.0);
        assert_eq!(payment.details.len(), 1);
        assert_eq!(payment.details[0].tip_amount, 1.5);
        assert_eq!(order.total_tips(), 4.5);
    }

    #[test]
    fn test_parse_orders_missing_send_time_kept() {
        // Open orders have no send time yet; exclusion from buckets
        // happens downstream, not here.
        let xml = "<Orders><Order><Id>1</Id><Total>5.00</Total></Order></Orders>";
        let orders = parse_orders(xml).unwrap();
        assert_eq!(orders.len(), 1);
        assert!(orders[0].first_send_time.is_none());
    }

    const SHIFTS_XML: &str = r#"
        <GetShiftsResult><ResultCode>0</ResultCode><Shifts>
            <Shift>
                <EmployeeId>88</EmployeeId>
                <ClockInTime>2024-01-15T17:00:00Z</ClockInTime>
                <ClockOutTime>2024-01-15T19:00:00Z</ClockOutTime>
                <MinutesWorked>120</MinutesWorked>
                <PayRate>15.00</PayRate>
                <BusinessDate>2024-01-15</BusinessDate>
            </Shift>
            <Shift>
                <EmployeeId>91</EmployeeId>
                <ClockInTime>2024-01-15T16:00:00Z</ClockInTime>
            </Shift>
            <Shift>
                <EmployeeId>92</EmployeeId>
                <ClockInTime>2024-01-15T10:00:00Z</ClockInTime>
                <ClockOutTime>2024-01-15T10:00:00Z</ClockOutTime>
                <MinutesWorked>0</MinutesWorked>
            </Shift>
            <Shift><PayRate>9.00</PayRate></Shift>
        </Shifts></GetShiftsResult>"#;

    #[test]
    fn test_parse_shifts_filters() {
        let shifts = parse_shifts(SHIFTS_XML).unwrap();
        // Closed zero-minute and malformed shifts dropped, open shift kept
        assert_eq!(shifts.len(), 2);

        assert_eq!(shifts[0].employee_id, "88");
        assert_eq!(shifts[0].minutes_worked, 120);
        assert_eq!(shifts[0].pay_rate, 15.0);
        assert!(!shifts[0].is_open());

        assert_eq!(shifts[1].employee_id, "91");
        assert!(shifts[1].is_open());
        assert_eq!(shifts[1].minutes_worked, 0);
    }

    #[test]
    fn test_parse_shift_minutes_fallback_from_punches() {
        let xml = r#"<Shift>
            <EmployeeId>88</EmployeeId>
            <ClockInTime>2024-01-15T09:00:00Z</ClockInTime>
            <ClockOutTime>2024-01-15T12:30:00Z</ClockOutTime>
        </Shift>"#;
        let shifts = parse_shifts(xml).unwrap();
        assert_eq!(shifts[0].minutes_worked, 210);
    }

    const EMPLOYEES_XML: &str = r#"
        <GetEmployeesResult><ResultCode>0</ResultCode><Employees>
            <Employee>
                <Id>88</Id><FirstName>Dana</FirstName><LastName>Reyes</LastName>
                <Active>true</Active><PayRate>12.00</PayRate>
                <Jobs><Job><Id>J4</Id><PayRate>15.50</PayRate></Job></Jobs>
            </Employee>
            <Employee>
                <Id>89</Id><FirstName>Sam</FirstName><LastName>Ortiz</LastName>
                <Active>false</Active><PayRate>11.00</PayRate>
            </Employee>
            <Employee>
                <Id>90</Id><FirstName>Lee</FirstName><LastName>Nguyen</LastName>
                <Active>true</Active><PayRate>0</PayRate>
            </Employee>
        </Employees></GetEmployeesResult>"#;

    #[test]
    fn test_parse_employees_active_filter_and_rates() {
        let employees = parse_employees(EMPLOYEES_XML).unwrap();
        assert_eq!(employees.len(), 2);

        let dana = &employees[0];
        assert_eq!(dana.id, "88");
        assert_eq!(dana.job_code_id.as_deref(), Some("J4"));
        assert_eq!(dana.pay_rate, 12.0);
        assert_eq!(dana.job_type_pay_rate, 15.5);
        assert_eq!(dana.effective_pay_rate(), 15.5);

        // Salaried: no job override, zero base
        let lee = &employees[1];
        assert_eq!(lee.effective_pay_rate(), 0.0);
    }

    #[test]
    fn test_parse_utc_forms() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 15, 18, 0, 0).unwrap();
        assert_eq!(parse_utc("2024-01-15T18:00:00Z"), Some(expected));
        assert_eq!(parse_utc("2024-01-15T18:00:00"), Some(expected));
        assert_eq!(parse_utc("2024-01-15 18:00:00"), Some(expected));
        assert_eq!(parse_utc("2024-01-15T18:00:00.000Z"), Some(expected));
        assert_eq!(parse_utc("not-a-time"), None);
    }
}
