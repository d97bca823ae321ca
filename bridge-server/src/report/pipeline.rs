//! Consolidated dashboard pipeline
//!
//! Fetch -> parse -> bucket -> aggregate for one location and one
//! business day. The three POS calls fan out concurrently; a failed
//! source degrades to an empty record set with a warning, so a report
//! is produced whenever the location and tokens were valid.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use shared::error::AppResult;
use shared::models::{
    ClockedInEmployee, DashboardReport, HourlyLabor, HourlySales, Location, PosEmployee, PosOrder,
};

use crate::brink::BrinkCredentials;
use crate::core::AppState;

use super::{aggregate, buckets};

fn location_tz(location: &Location) -> Tz {
    location.timezone.parse().unwrap_or_else(|_| {
        tracing::warn!(
            timezone = %location.timezone,
            location = %location.name,
            "Unknown IANA timezone, bucketing in UTC"
        );
        Tz::UTC
    })
}

/// Degrade one failed upstream source to an empty record set
fn or_empty<T>(result: AppResult<Vec<T>>, source: &str, location: &Location) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(
                code = %err.code,
                message = %err.message,
                source,
                location = %location.name,
                "Upstream source failed, continuing with empty data"
            );
            Vec::new()
        }
    }
}

fn roster_by_id(employees: Vec<PosEmployee>) -> HashMap<String, PosEmployee> {
    employees.into_iter().map(|e| (e.id.clone(), e)).collect()
}

/// Build the hourly dashboard report for one location
pub async fn build_dashboard_report(
    state: &AppState,
    location: &Location,
    creds: &BrinkCredentials,
    requested_date: Option<NaiveDate>,
) -> AppResult<DashboardReport> {
    let clock = state.clock.resolve(&location.timezone).await;
    let business_date = requested_date.unwrap_or(clock.business_date);

    // The three POS sources are independent; fan out and join.
    let (orders_result, shifts_result, employees_result) = tokio::join!(
        state.brink.get_orders(creds, business_date),
        state.brink.get_shifts(creds, business_date),
        state.brink.get_employees(creds),
    );

    let orders = or_empty(orders_result, "orders", location);
    let shifts = or_empty(shifts_result, "shifts", location);
    let roster = roster_by_id(or_empty(employees_result, "employees", location));

    let tz = location_tz(location);
    let day = buckets::build_hour_buckets(&orders, &shifts, &roster, tz, clock.local_now);
    let totals = aggregate::aggregate(&day);
    let total_tips = orders.iter().map(PosOrder::total_tips).sum();

    Ok(DashboardReport {
        location: location.name.clone(),
        location_id: location.location_id.clone(),
        business_date: business_date.format("%Y-%m-%d").to_string(),
        utc_offset_minutes: clock.offset_minutes,
        hourly_sales: day.iter().map(HourlySales::from).collect(),
        hourly_labor: day.iter().map(HourlyLabor::from).collect(),
        total_sales: totals.sales,
        total_guests: totals.guests,
        total_orders: totals.orders,
        total_labor_cost: totals.labor_cost,
        total_labor_hours: totals.labor_hours,
        total_tips,
        labor_percentage: totals.labor_percentage,
        overall_guest_average: totals.guest_average,
        overall_order_average: totals.order_average,
    })
}

/// List the employees currently clocked in at one location
///
/// Open shifts (no clock-out punch) joined against the roster for
/// names and rates, oldest punch first.
pub async fn build_clocked_in(
    state: &AppState,
    location: &Location,
    creds: &BrinkCredentials,
) -> AppResult<Vec<ClockedInEmployee>> {
    let clock = state.clock.resolve(&location.timezone).await;

    let (shifts_result, employees_result) = tokio::join!(
        state.brink.get_shifts(creds, clock.business_date),
        state.brink.get_employees(creds),
    );

    let shifts = or_empty(shifts_result, "shifts", location);
    let roster = roster_by_id(or_empty(employees_result, "employees", location));

    let now = Utc::now();
    let mut active: Vec<ClockedInEmployee> = shifts
        .iter()
        .filter(|s| s.is_open())
        .map(|s| {
            let employee = roster.get(&s.employee_id);
            let hours_so_far = ((now - s.clock_in).num_minutes() as f64 / 60.0).max(0.0);
            let pay_rate = if s.pay_rate > 0.0 {
                s.pay_rate
            } else {
                employee.map(PosEmployee::effective_pay_rate).unwrap_or(0.0)
            };
            ClockedInEmployee {
                employee_id: s.employee_id.clone(),
                name: employee
                    .map(PosEmployee::display_name)
                    .unwrap_or_else(|| s.employee_id.clone()),
                job_code_id: employee.and_then(|e| e.job_code_id.clone()),
                clock_in: s.clock_in,
                hours_so_far,
                pay_rate,
            }
        })
        .collect();
    active.sort_by_key(|e| e.clock_in);

    Ok(active)
}
