//! Daily metrics aggregation
//!
//! Rolls the 24 hour buckets up into whole-day totals and KPIs. Every
//! ratio here is zero-safe: a zero denominator reads as 0, never as
//! NaN or infinity.

use shared::models::{HourBucket, ReportTotals};

/// sales / denominator with a zero-safe denominator
fn safe_average(sales: f64, denominator: i64) -> f64 {
    if denominator > 0 {
        sales / denominator as f64
    } else {
        0.0
    }
}

/// Labor percentage three-case rule:
/// 1. no labor recorded -> 0
/// 2. labor but zero revenue -> 100
/// 3. otherwise labor cost as a percentage of sales
pub fn labor_percentage(labor_hours: f64, labor_cost: f64, sales: f64) -> f64 {
    if labor_hours == 0.0 {
        0.0
    } else if sales == 0.0 {
        100.0
    } else {
        labor_cost / sales * 100.0
    }
}

/// Elementwise rollup of all 24 buckets plus the KPI fields
pub fn aggregate(buckets: &[HourBucket; 24]) -> ReportTotals {
    let mut totals = ReportTotals::default();
    for bucket in buckets {
        totals.sales += bucket.sales;
        totals.guests += bucket.guests;
        totals.orders += bucket.orders;
        totals.labor_hours += bucket.labor_hours;
        totals.labor_cost += bucket.labor_cost;
    }

    totals.guest_average = safe_average(totals.sales, totals.guests);
    totals.order_average = safe_average(totals.sales, totals.orders);
    totals.labor_percentage =
        labor_percentage(totals.labor_hours, totals.labor_cost, totals.sales);
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::buckets::new_day_buckets;

    #[test]
    fn test_labor_percentage_three_cases() {
        // No labor at all
        assert_eq!(labor_percentage(0.0, 0.0, 500.0), 0.0);
        // Labor but no revenue
        assert_eq!(labor_percentage(4.0, 60.0, 0.0), 100.0);
        // The normal case: 200 cost on 800 sales = 25%
        assert_eq!(labor_percentage(16.0, 200.0, 800.0), 25.0);
    }

    #[test]
    fn test_averages_zero_safe_and_finite() {
        let buckets = new_day_buckets();
        let totals = aggregate(&buckets);

        assert_eq!(totals.guest_average, 0.0);
        assert_eq!(totals.order_average, 0.0);
        assert_eq!(totals.labor_percentage, 0.0);
        assert!(totals.guest_average.is_finite());
        assert!(totals.order_average.is_finite());
        assert!(totals.labor_percentage.is_finite());
    }

    #[test]
    fn test_elementwise_totals() {
        let mut buckets = new_day_buckets();
        buckets[11].sales = 100.0;
        buckets[11].guests = 4;
        buckets[11].orders = 4;
        buckets[11].labor_hours = 3.0;
        buckets[11].labor_cost = 45.0;
        buckets[18].sales = 60.0;
        buckets[18].guests = 2;
        buckets[18].orders = 2;
        buckets[18].labor_hours = 1.0;
        buckets[18].labor_cost = 15.0;

        let totals = aggregate(&buckets);
        assert_eq!(totals.sales, 160.0);
        assert_eq!(totals.guests, 6);
        assert_eq!(totals.orders, 6);
        assert_eq!(totals.labor_hours, 4.0);
        assert_eq!(totals.labor_cost, 60.0);
        assert!((totals.guest_average - 160.0 / 6.0).abs() < 1e-9);
        assert!((totals.order_average - 160.0 / 6.0).abs() < 1e-9);
        assert!((totals.labor_percentage - 37.5).abs() < 1e-9);
    }

    #[test]
    fn test_labor_without_sales_reads_full() {
        let mut buckets = new_day_buckets();
        buckets[8].labor_hours = 2.0;
        buckets[8].labor_cost = 30.0;

        let totals = aggregate(&buckets);
        assert_eq!(totals.labor_percentage, 100.0);
    }
}
