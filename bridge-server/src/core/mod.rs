//! Core module — server configuration and state
//!
//! - [`Config`] - Server configuration
//! - [`AppState`] - Shared application state

pub mod config;
pub mod state;

pub use config::Config;
pub use state::AppState;
