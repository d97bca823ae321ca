//! Unified error codes for the POS Bridge
//!
//! This module defines all error codes used across the bridge server and
//! any future client surface. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication/credential errors
//! - 2xxx: Location errors
//! - 3xxx: Upstream (POS / time service) errors
//! - 4xxx: Report errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// Caller is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials
    InvalidCredentials = 1002,
    /// Access token has expired
    TokenExpired = 1003,
    /// Access token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Location ====================
    /// Location not found for the supplied token
    LocationNotFound = 2001,
    /// Location token is malformed
    LocationTokenInvalid = 2002,
    /// Location has an unknown IANA timezone
    TimezoneInvalid = 2003,
    /// Location directory could not be loaded
    LocationDirectoryUnavailable = 2004,

    // ==================== 3xxx: Upstream ====================
    /// POS service unreachable (network failure)
    PosUnavailable = 3001,
    /// POS service call timed out
    PosTimeout = 3002,
    /// POS responded with a non-zero ResultCode
    PosProtocolError = 3003,
    /// POS response body could not be interpreted
    PosMalformedResponse = 3004,
    /// External time service unreachable
    TimeServiceUnavailable = 3101,

    // ==================== 4xxx: Report ====================
    /// Requested business date is invalid
    ReportDateInvalid = 4001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "Caller is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid credentials",
            ErrorCode::TokenExpired => "Access token has expired",
            ErrorCode::TokenInvalid => "Access token is invalid",

            // Location
            ErrorCode::LocationNotFound => "Location not found for the supplied token",
            ErrorCode::LocationTokenInvalid => "Location token is malformed",
            ErrorCode::TimezoneInvalid => "Location timezone is not a known IANA zone",
            ErrorCode::LocationDirectoryUnavailable => "Location directory could not be loaded",

            // Upstream
            ErrorCode::PosUnavailable => "POS service is unreachable",
            ErrorCode::PosTimeout => "POS service call timed out",
            ErrorCode::PosProtocolError => "POS rejected the request",
            ErrorCode::PosMalformedResponse => "POS response could not be interpreted",
            ErrorCode::TimeServiceUnavailable => "Time service is unreachable",

            // Report
            ErrorCode::ReportDateInvalid => "Business date is invalid",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => ErrorCode::Success,
            1 => ErrorCode::Unknown,
            2 => ErrorCode::ValidationFailed,
            3 => ErrorCode::NotFound,
            4 => ErrorCode::AlreadyExists,
            5 => ErrorCode::InvalidRequest,
            6 => ErrorCode::InvalidFormat,
            7 => ErrorCode::RequiredField,
            8 => ErrorCode::ValueOutOfRange,
            1001 => ErrorCode::NotAuthenticated,
            1002 => ErrorCode::InvalidCredentials,
            1003 => ErrorCode::TokenExpired,
            1004 => ErrorCode::TokenInvalid,
            2001 => ErrorCode::LocationNotFound,
            2002 => ErrorCode::LocationTokenInvalid,
            2003 => ErrorCode::TimezoneInvalid,
            2004 => ErrorCode::LocationDirectoryUnavailable,
            3001 => ErrorCode::PosUnavailable,
            3002 => ErrorCode::PosTimeout,
            3003 => ErrorCode::PosProtocolError,
            3004 => ErrorCode::PosMalformedResponse,
            3101 => ErrorCode::TimeServiceUnavailable,
            4001 => ErrorCode::ReportDateInvalid,
            9001 => ErrorCode::InternalError,
            9003 => ErrorCode::NetworkError,
            9004 => ErrorCode::TimeoutError,
            9005 => ErrorCode::ConfigError,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::LocationNotFound.code(), 2001);
        assert_eq!(ErrorCode::PosProtocolError.code(), 3003);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
    }

    #[test]
    fn test_try_from_roundtrip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::RequiredField,
            ErrorCode::LocationNotFound,
            ErrorCode::PosUnavailable,
            ErrorCode::PosProtocolError,
            ErrorCode::TimeServiceUnavailable,
            ErrorCode::InternalError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(1234), Err(InvalidErrorCode(1234)));
    }

    #[test]
    fn test_serde_as_u16() {
        let json = serde_json::to_string(&ErrorCode::PosProtocolError).unwrap();
        assert_eq!(json, "3003");

        let code: ErrorCode = serde_json::from_str("2001").unwrap();
        assert_eq!(code, ErrorCode::LocationNotFound);
    }
}
