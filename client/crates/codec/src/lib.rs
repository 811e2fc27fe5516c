//! Identifier-Safe Serialization Layer
//!
//! Sits between the HTTP transport and application code. Every payload that
//! crosses the client/server boundary passes through here so that
//! identifier-like fields keep their full decimal precision, even when a
//! producer emitted them as numbers beyond the 53-bit safe-integer range.
//!
//! - `payload` - the tagged document model ([`Payload`])
//! - `scalar` - per-value conversions (big integer, decimal string)
//! - `field` - identifier field-name rules
//! - `normalize` - recursive document walks
//! - `form` - multipart form containers
//! - `wire` - request/response entry points and JSON parsing
//!
//! All operations are pure: they consume their input and return a new value.

pub mod error;
pub mod field;
pub mod form;
pub mod normalize;
pub mod payload;
pub mod scalar;
pub mod wire;

pub use error::{CodecError, CodecResult};
pub use field::{has_generic_id_suffix, is_identifier_field};
pub use form::{FilePart, FormData, FormValue};
pub use normalize::{Direction, normalize_identifier_fields_deep};
pub use payload::Payload;
pub use scalar::{
    MAX_SAFE_INTEGER, MIN_SAFE_INTEGER, identifiers_equal, is_likely_large_identifier,
    parse_integer, to_bigint_or_passthrough, to_decimal_string,
};
pub use wire::{
    RequestPayload, decode_response_payload, encode_request_payload, parse_backend_response,
    parse_trusted_json,
};

#[cfg(test)]
mod tests;
