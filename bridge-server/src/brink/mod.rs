//! PAR Brink POS integration
//!
//! SOAP envelope construction, tolerant XML extraction and response
//! parsers for the three upstream services (Sales, Labor, Settings).

pub mod client;
pub mod parse;
pub mod soap;
pub mod xml;

pub use client::{BrinkClient, BrinkCredentials};
