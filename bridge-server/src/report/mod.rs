//! Hourly report engine
//!
//! - [`buckets`] - local-hour bucketing and shift apportionment
//! - [`aggregate`] - daily totals and KPI rules
//! - [`pipeline`] - fetch -> parse -> bucket -> aggregate orchestration

pub mod aggregate;
pub mod buckets;
pub mod pipeline;
