//! Request/response entry points
//!
//! The transport calls [`encode_request_payload`] on every outgoing body and
//! [`parse_trusted_json`] followed by [`decode_response_payload`] on every
//! incoming one.

use crate::error::{CodecError, CodecResult};
use crate::form::FormData;
use crate::normalize::Walker;
use crate::payload::Payload;

/// An outgoing request body
#[derive(Debug, Clone, PartialEq)]
pub enum RequestPayload {
    /// JSON document
    Document(Payload),
    /// Multipart form
    Form(FormData),
}

impl From<Payload> for RequestPayload {
    fn from(payload: Payload) -> Self {
        RequestPayload::Document(payload)
    }
}

impl From<FormData> for RequestPayload {
    fn from(form: FormData) -> Self {
        RequestPayload::Form(form)
    }
}

/// Prepare an outgoing body
///
/// Forms keep their entries except that large-identifier values become
/// decimal strings. Documents are walked: any field whose value looks like a
/// large identifier is stringified, and so is every other scalar leaf. The
/// key plays no part here, unlike [`decode_response_payload`].
pub fn encode_request_payload(data: RequestPayload) -> RequestPayload {
    match data {
        RequestPayload::Form(form) => RequestPayload::Form(form.encode()),
        RequestPayload::Document(document) => {
            RequestPayload::Document(Walker::REQUEST.walk(document))
        }
    }
}

/// Normalize an incoming document
///
/// Allowlisted identifier fields and all other scalar leaves are forced to
/// decimal strings. The backend already sends identifiers as strings, so on
/// well-formed input this is idempotent.
pub fn decode_response_payload(data: Payload) -> Payload {
    Walker::TO_DECIMAL_STRING.walk(data)
}

/// Parse a JSON document from a producer that stringifies its identifiers
///
/// Integer literals beyond the safe range still decode without loss.
pub fn parse_trusted_json(text: &str) -> CodecResult<Payload> {
    serde_json::from_str::<Payload>(text).map_err(|e| {
        let err = CodecError::MalformedDocument(e);
        err.log();
        err
    })
}

/// Lenient variant of [`parse_trusted_json`] for raw response bodies
///
/// Empty bodies and bodies that are not JSON come back as a string payload
/// holding the original text.
pub fn parse_backend_response(text: &str) -> Payload {
    if text.trim().is_empty() {
        return Payload::String(text.to_string());
    }
    match serde_json::from_str::<Payload>(text) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(error = %e, "Response body is not JSON, using raw text");
            Payload::String(text.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FilePart, FormValue};
    use num_bigint::BigInt;

    #[test]
    fn test_encode_document_uses_value_rule() {
        let doc = Payload::object([
            ("note", Payload::BigInt(BigInt::from(5))),
            ("user_id", Payload::Null),
            ("count", Payload::Number(3.0)),
        ]);
        let RequestPayload::Document(out) = encode_request_payload(doc.into()) else {
            panic!("expected a document");
        };
        assert_eq!(out.get("note"), Some(&Payload::from("5")));
        assert_eq!(out.get("user_id"), Some(&Payload::Null));
        assert_eq!(out.get("count"), Some(&Payload::from("3")));
    }

    #[test]
    fn test_encode_scalar_document() {
        let out = encode_request_payload(Payload::Number(7.0).into());
        assert_eq!(out, RequestPayload::Document(Payload::from("7")));
        let out = encode_request_payload(Payload::Null.into());
        assert_eq!(out, RequestPayload::Document(Payload::Null));
    }

    #[test]
    fn test_encode_form() {
        let mut form = FormData::new();
        form.append("contractId", Payload::BigInt(BigInt::from(12)))
            .append_file("signFile", FilePart::new("sign.png", vec![0]));
        let RequestPayload::Form(out) = encode_request_payload(form.into()) else {
            panic!("expected a form");
        };
        assert_eq!(
            out.get("contractId"),
            Some(&FormValue::Value(Payload::from("12")))
        );
    }

    #[test]
    fn test_parse_trusted_json_rejects_malformed() {
        assert!(matches!(
            parse_trusted_json("{\"code\": 200,"),
            Err(CodecError::MalformedDocument(_))
        ));
        assert!(parse_trusted_json("").is_err());
    }

    #[test]
    fn test_parse_backend_response_is_lenient() {
        assert_eq!(parse_backend_response(""), Payload::from(""));
        assert_eq!(parse_backend_response("<html>"), Payload::from("<html>"));
        assert_eq!(
            parse_backend_response(r#"{"code":200}"#),
            Payload::object([("code", Payload::Number(200.0))])
        );
    }
}
