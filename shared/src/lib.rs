//! Shared types for the POS Bridge
//!
//! Wire-visible types used across the workspace: the unified error
//! system, POS record types produced by the Brink parsers, and the
//! hourly report DTOs returned by the dashboard API.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
