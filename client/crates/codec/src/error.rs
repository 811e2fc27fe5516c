//! Codec Error Types
//!
//! Only whole-document failures surface as errors. Individual scalars that
//! cannot be converted are passed through with a warning instead.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Codec-specific result type alias
pub type CodecResult<T> = Result<T, CodecError>;

#[derive(Debug, Error)]
pub enum CodecError {
    /// The text is not a JSON document
    #[error("Malformed JSON document: {0}")]
    MalformedDocument(#[source] serde_json::Error),

    /// The document does not fit the requested type
    #[error("Payload does not match the expected shape: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// The value has no JSON form (non-string map keys, failing `Serialize` impls)
    #[error("Value cannot be represented as a payload: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl CodecError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::MalformedPayload
    }

    pub(crate) fn log(&self) {
        match self {
            CodecError::MalformedDocument(e) => {
                tracing::error!(error = %e, "JSON document could not be parsed");
            }
            CodecError::Deserialize(e) => {
                tracing::warn!(error = %e, "Payload shape mismatch");
            }
            CodecError::Serialize(e) => {
                tracing::error!(error = %e, "Value could not be turned into a payload");
            }
        }
    }
}

impl From<CodecError> for AppError {
    fn from(err: CodecError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        match err {
            CodecError::MalformedDocument(source)
            | CodecError::Deserialize(source)
            | CodecError::Serialize(source) => {
                AppError::new(kind, message).with_source(source)
            }
        }
    }
}
