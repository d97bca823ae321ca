//! POS Bridge Server
//!
//! Integration service bridging a multi-tenant workforce-management
//! platform with the PAR Brink point-of-sale:
//!
//! - **Brink client** (`brink`): SOAP envelopes, tolerant XML
//!   extraction and response parsers for the Sales/Labor/Settings
//!   services
//! - **Report engine** (`report`): timezone-correct hourly bucketing,
//!   apportionment and daily KPI aggregation
//! - **Services** (`services`): location directory cache and
//!   business-clock resolution with time-API / tz-database fallback
//! - **HTTP API** (`api`): dashboard endpoints
//!
//! # Module structure
//!
//! ```text
//! bridge-server/src/
//! ├── core/          # Configuration, state
//! ├── api/           # HTTP routes and handlers
//! ├── brink/         # POS SOAP client and parsers
//! ├── report/        # Bucketing engine, aggregator, pipeline
//! └── services/      # Location directory, timezone resolver
//! ```

pub mod api;
pub mod brink;
pub mod core;
pub mod report;
pub mod services;

// Re-export common types
pub use crate::core::{AppState, Config};
pub use services::{BusinessClock, ClockSource, LocationDirectory, TimeService};
