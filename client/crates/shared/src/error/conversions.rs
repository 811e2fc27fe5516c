//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`].

use super::app_error::AppError;
use super::kind::ErrorKind;

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::TimedOut => ErrorKind::RequestTimeout,
            std::io::ErrorKind::ConnectionRefused
            | std::io::ErrorKind::ConnectionReset
            | std::io::ErrorKind::ConnectionAborted => ErrorKind::Network,
            _ => ErrorKind::InternalServerError,
        };
        AppError::new(kind, "I/O operation failed").with_source(err)
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::bad_request("Invalid integer format").with_source(err)
    }
}

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_eof() {
            AppError::malformed(format!("JSON parse error: {}", err)).with_source(err)
        } else if err.is_data() {
            AppError::malformed(format!("Unexpected JSON shape: {}", err)).with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// reqwest conversions (feature-gated)
// ============================================================================

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::new(ErrorKind::RequestTimeout, "Request timed out").with_source(err)
        } else if err.is_connect() {
            AppError::service_unavailable("Backend is unreachable").with_source(err)
        } else if let Some(status) = err.status() {
            AppError::new(ErrorKind::from_status(status.as_u16()), "Request failed")
                .with_source(err)
        } else if err.is_decode() {
            AppError::malformed("Response body could not be decoded").with_source(err)
        } else if err.is_builder() {
            AppError::bad_request("Request could not be built").with_source(err)
        } else {
            AppError::network("Request failed").with_source(err)
        }
    }
}
