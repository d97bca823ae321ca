//! Labor Shift Model

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A labor shift (punch pair) as reported by the Brink Labor service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub employee_id: String,
    /// UTC clock-in timestamp
    pub clock_in: DateTime<Utc>,
    /// UTC clock-out timestamp, absent while the shift is open
    pub clock_out: Option<DateTime<Utc>>,
    /// Minutes worked as reported by the POS
    pub minutes_worked: i64,
    /// Hourly rate embedded on the shift; 0 when the POS did not send
    /// one (resolved against the employee roster instead)
    pub pay_rate: f64,
    /// Business date label (YYYY-MM-DD) the POS filed this shift under
    pub business_date: String,
}

impl ShiftRecord {
    /// Hours worked, derived from the reported minutes
    pub fn hours_worked(&self) -> f64 {
        self.minutes_worked as f64 / 60.0
    }

    /// Shift end: clock-in plus the reported minutes
    pub fn end_time(&self) -> DateTime<Utc> {
        self.clock_in + Duration::minutes(self.minutes_worked)
    }

    /// An open shift has no clock-out punch yet
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }
}
