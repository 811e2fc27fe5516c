//! Market Error Types
//!
//! Failures detected on the client side, before or after talking to the
//! backend. They convert into the unified `kernel::error::AppError`.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Market-specific result type alias
pub type MarketResult<T> = Result<T, MarketError>;

/// Market-specific error variants
#[derive(Debug, Error)]
pub enum MarketError {
    /// Role code the client does not know
    #[error("Unknown role code: {0}")]
    UnknownRole(String),

    /// Login succeeded but no token came back
    #[error("Login response carried no token")]
    MissingToken,

    /// Page number or size out of range
    #[error("Invalid paging: {0}")]
    InvalidPage(String),
}

impl MarketError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MarketError::UnknownRole(_) | MarketError::MissingToken => ErrorKind::MalformedPayload,
            MarketError::InvalidPage(_) => ErrorKind::BadRequest,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            MarketError::MissingToken => {
                tracing::error!("Login response carried no token");
            }
            _ => {
                tracing::debug!(error = %self, "Market error");
            }
        }
    }
}

impl From<MarketError> for AppError {
    fn from(err: MarketError) -> Self {
        err.log();
        AppError::new(err.kind(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_keeps_kind_and_message() {
        let app: AppError = MarketError::UnknownRole("guest".into()).into();
        assert_eq!(app.kind(), ErrorKind::MalformedPayload);
        assert_eq!(app.message(), "Unknown role code: guest");

        let app: AppError = MarketError::InvalidPage("page size 0".into()).into();
        assert_eq!(app.kind(), ErrorKind::BadRequest);
    }
}
