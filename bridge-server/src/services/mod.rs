//! Collaborator services
//!
//! - [`LocationDirectory`] - token -> location metadata cache
//! - [`TimeService`] - business-clock resolution (time API with
//!   tz-database fallback)

pub mod locations;
pub mod timezone;

pub use locations::LocationDirectory;
pub use timezone::{BusinessClock, ClockSource, TimeService, BUSINESS_DAY_CUTOFF_HOUR};
