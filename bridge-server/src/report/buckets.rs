//! Hourly bucketing and shift apportionment
//!
//! Orders land in the local hour their first kitchen send occurred.
//! Shifts spread their worked hours evenly across every local hour
//! they span, with hours that have not yet occurred filtered out so
//! pre-scheduled shift data never shows up as actuals.

use std::collections::HashMap;

use chrono::{NaiveDateTime, Timelike};
use chrono_tz::Tz;
use shared::models::{HourBucket, PosEmployee, PosOrder, ShiftRecord};

/// Guests attributed to each order. Brink does not report party size,
/// so every order counts as a single guest until real data exists.
pub const GUESTS_PER_ORDER: i64 = 1;

/// Fresh 24-slot accumulator array keyed by local hour
pub fn new_day_buckets() -> [HourBucket; 24] {
    std::array::from_fn(|hour| HourBucket::new(hour as u32))
}

/// Accumulate orders into their local send-time hour.
///
/// Orders with no send time never reached the kitchen and are skipped;
/// non-positive totals are already dropped by the parser but guarded
/// here as well.
pub fn accumulate_orders(buckets: &mut [HourBucket; 24], orders: &[PosOrder], tz: Tz) {
    for order in orders {
        let Some(sent) = order.first_send_time else {
            continue;
        };
        if order.total <= 0.0 {
            continue;
        }

        let hour = sent.with_timezone(&tz).hour() as usize;
        let bucket = &mut buckets[hour];
        bucket.sales += order.total;
        bucket.orders += 1;
        bucket.guests += GUESTS_PER_ORDER;
        bucket.guest_average = if bucket.guests > 0 {
            bucket.sales / bucket.guests as f64
        } else {
            0.0
        };
    }
}

/// Local hours a shift touches.
///
/// A shift that stays inside one day spans `[start..end)` — ending
/// exactly on the hour does not touch the ending hour. A shift that
/// crosses midnight spans `[start..=23]` plus `[0..=end]`. A span that
/// would be empty collapses to the start hour.
fn shift_hour_span(start_hour: u32, end_hour: u32) -> Vec<u32> {
    if end_hour > start_hour {
        (start_hour..end_hour).collect()
    } else if end_hour == start_hour {
        vec![start_hour]
    } else {
        (start_hour..=23).chain(0..=end_hour).collect()
    }
}

/// Accumulate shifts into every retained local hour they span.
///
/// Apportionment divides the shift's worked hours by the *original*
/// span length; filtering out future hours does not redistribute the
/// remainder. Labor cost accrues only for hourly employees (effective
/// rate > 0) — salaried shifts still count toward hours and headcount.
pub fn accumulate_shifts(
    buckets: &mut [HourBucket; 24],
    shifts: &[ShiftRecord],
    roster: &HashMap<String, PosEmployee>,
    tz: Tz,
    now_local: NaiveDateTime,
) {
    for shift in shifts {
        if shift.minutes_worked <= 0 {
            continue;
        }

        // Both punches convert from UTC independently; adding minutes
        // in local space would drift across a DST transition.
        let start_local = shift.clock_in.with_timezone(&tz).naive_local();
        let end_local = shift.end_time().with_timezone(&tz).naive_local();
        let span = shift_hour_span(start_local.hour(), end_local.hour());
        let hours_per_bucket = shift.hours_worked() / span.len() as f64;

        // Shift-embedded rate wins; the roster fills the gap.
        let rate = if shift.pay_rate > 0.0 {
            shift.pay_rate
        } else {
            roster
                .get(&shift.employee_id)
                .map(PosEmployee::effective_pay_rate)
                .unwrap_or(0.0)
        };

        // Walk the span with real dates so post-midnight slots compare
        // as future while "now" is still before midnight.
        let mut slot_date = start_local.date();
        let mut prev_hour = start_local.hour();
        for hour in span {
            if hour < prev_hour {
                slot_date = slot_date.succ_opt().unwrap_or(slot_date);
            }
            prev_hour = hour;

            let Some(slot_start) = slot_date.and_hms_opt(hour, 0, 0) else {
                continue;
            };
            if slot_start > now_local {
                continue;
            }

            let bucket = &mut buckets[hour as usize];
            bucket.labor_hours += hours_per_bucket;
            bucket.employees_working += 1;
            if rate > 0.0 {
                bucket.labor_cost += hours_per_bucket * rate;
            }
        }
    }
}

/// Clamp accumulated values to zero. Negative POS adjustments must not
/// surface as negative hourly metrics. Labor hours are deliberately
/// not capped against headcount: overlapping split shifts legitimately
/// exceed it.
pub fn clamp_buckets(buckets: &mut [HourBucket; 24]) {
    for bucket in buckets.iter_mut() {
        bucket.sales = bucket.sales.max(0.0);
        bucket.labor_hours = bucket.labor_hours.max(0.0);
        bucket.labor_cost = bucket.labor_cost.max(0.0);
        bucket.guests = bucket.guests.max(0);
        bucket.orders = bucket.orders.max(0);
        bucket.employees_working = bucket.employees_working.max(0);
        bucket.guest_average = if bucket.guests > 0 {
            bucket.sales / bucket.guests as f64
        } else {
            0.0
        };
    }
}

/// Build the merged 24-slot bucket array for one business day
pub fn build_hour_buckets(
    orders: &[PosOrder],
    shifts: &[ShiftRecord],
    roster: &HashMap<String, PosEmployee>,
    tz: Tz,
    now_local: NaiveDateTime,
) -> [HourBucket; 24] {
    let mut buckets = new_day_buckets();
    accumulate_orders(&mut buckets, orders, tz);
    accumulate_shifts(&mut buckets, shifts, roster, tz, now_local);
    clamp_buckets(&mut buckets);
    buckets
}
