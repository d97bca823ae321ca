//! Hourly Report Models
//!
//! DTOs returned by the dashboard API. Wire names are camelCase for the
//! dashboard frontend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One local-hour accumulator (0-23) for sales and labor metrics
///
/// Mutable during a single report build, discarded after the response
/// is assembled. All monetary/hour fields are non-negative once the
/// engine's clamp pass has run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourBucket {
    /// Local hour of day (0-23) in the location's timezone
    pub hour: u32,
    pub sales: f64,
    pub guests: i64,
    pub orders: i64,
    /// sales / guests, 0 when no guests
    pub guest_average: f64,
    pub labor_hours: f64,
    pub labor_cost: f64,
    /// Distinct shift touches in this hour; overlapping shifts may
    /// legitimately push labor_hours above this count
    pub employees_working: i64,
}

impl HourBucket {
    /// Empty bucket for a given local hour
    pub fn new(hour: u32) -> Self {
        Self {
            hour,
            ..Self::default()
        }
    }
}

/// Sales projection of an hour bucket
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlySales {
    pub hour: u32,
    pub sales: f64,
    pub guests: i64,
    pub orders: i64,
    pub guest_average: f64,
}

impl From<&HourBucket> for HourlySales {
    fn from(b: &HourBucket) -> Self {
        Self {
            hour: b.hour,
            sales: b.sales,
            guests: b.guests,
            orders: b.orders,
            guest_average: b.guest_average,
        }
    }
}

/// Labor projection of an hour bucket
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyLabor {
    pub hour: u32,
    pub labor_hours: f64,
    pub labor_cost: f64,
    pub employees_working: i64,
}

impl From<&HourBucket> for HourlyLabor {
    fn from(b: &HourBucket) -> Self {
        Self {
            hour: b.hour,
            labor_hours: b.labor_hours,
            labor_cost: b.labor_cost,
            employees_working: b.employees_working,
        }
    }
}

/// Whole-day rollup across all 24 buckets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTotals {
    pub sales: f64,
    pub guests: i64,
    pub orders: i64,
    pub labor_hours: f64,
    pub labor_cost: f64,
    /// sales / guests, 0 when no guests
    pub guest_average: f64,
    /// sales / orders, 0 when no orders
    pub order_average: f64,
    /// 0 with no labor; 100 with labor but no sales; else cost/sales*100
    pub labor_percentage: f64,
}

/// Daily dashboard report for one location
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    /// Location display name
    pub location: String,
    pub location_id: String,
    /// Business date the report covers (YYYY-MM-DD)
    pub business_date: String,
    /// Signed minutes east of UTC at report time
    pub utc_offset_minutes: i32,
    pub hourly_sales: Vec<HourlySales>,
    pub hourly_labor: Vec<HourlyLabor>,
    pub total_sales: f64,
    pub total_guests: i64,
    pub total_orders: i64,
    pub total_labor_cost: f64,
    pub total_labor_hours: f64,
    /// Declared tips across all payments for the day
    pub total_tips: f64,
    pub labor_percentage: f64,
    pub overall_guest_average: f64,
    pub overall_order_average: f64,
}

/// One currently clocked-in employee (open shift joined to the roster)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockedInEmployee {
    pub employee_id: String,
    pub name: String,
    pub job_code_id: Option<String>,
    /// UTC clock-in timestamp of the open shift
    pub clock_in: DateTime<Utc>,
    /// Hours elapsed since clock-in, against "now" in the location zone
    pub hours_so_far: f64,
    pub pay_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_wire_names_are_camel_case() {
        let mut bucket = HourBucket::new(18);
        bucket.sales = 42.5;
        bucket.guest_average = 42.5;
        bucket.labor_hours = 1.0;
        bucket.employees_working = 1;

        let json = serde_json::to_value(&bucket).unwrap();
        assert_eq!(json["guestAverage"], 42.5);
        assert_eq!(json["laborHours"], 1.0);
        assert_eq!(json["employeesWorking"], 1);
    }

    #[test]
    fn test_projections() {
        let mut bucket = HourBucket::new(9);
        bucket.sales = 10.0;
        bucket.orders = 2;
        bucket.labor_cost = 30.0;

        let sales = HourlySales::from(&bucket);
        assert_eq!(sales.hour, 9);
        assert_eq!(sales.sales, 10.0);
        assert_eq!(sales.orders, 2);

        let labor = HourlyLabor::from(&bucket);
        assert_eq!(labor.hour, 9);
        assert_eq!(labor.labor_cost, 30.0);
    }
}
