//! Domain models for the POS Bridge
//!
//! Records produced by the Brink response parsers plus the report DTOs
//! returned by the dashboard API. Everything here is request-scoped:
//! fetched, transformed, aggregated, discarded.

pub mod employee;
pub mod location;
pub mod order;
pub mod report;
pub mod shift;

pub use employee::PosEmployee;
pub use location::Location;
pub use order::{Payment, PaymentDetail, PosOrder};
pub use report::{
    ClockedInEmployee, DashboardReport, HourBucket, HourlyLabor, HourlySales, ReportTotals,
};
pub use shift::ShiftRecord;
