//! HTTP Transport
//!
//! Wraps `reqwest` so that every body crossing the client/server boundary
//! goes through the codec:
//! - outgoing bodies through [`encode_request_payload`]
//! - incoming bodies through [`parse_trusted_json`], envelope unwrapping and
//!   [`decode_response_payload`]
//!
//! The bearer token comes from the [`SessionContext`] handed in at
//! construction. A 401 clears that context. Requests are never retried.

use codec::{
    FormData, FormValue, Payload, RequestPayload, decode_response_payload, encode_request_payload,
    parse_backend_response, parse_trusted_json, to_decimal_string,
};
use http::{Method, StatusCode};
use kernel::error::app_error::{AppError, AppResult};
use kernel::error::kind::ErrorKind;
use reqwest::multipart::{Form, Part};

use crate::config::ApiConfig;
use crate::session::SessionContext;

/// Envelope code that marks success
const SUCCESS_CODE: i64 = 200;
const DEFAULT_REJECTION: &str = "Operation failed";

/// HTTP client for the marketplace backend
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: ApiConfig,
    session: SessionContext,
}

impl HttpTransport {
    pub fn new(config: ApiConfig, session: SessionContext) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AppError::internal("Failed to build HTTP client").with_source(e))?;
        Ok(Self {
            client,
            config,
            session,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub async fn get(&self, path: &str, query: &[(String, String)]) -> AppResult<Payload> {
        self.send(Method::GET, path, query, None).await
    }

    pub async fn post(&self, path: &str, body: impl Into<RequestPayload>) -> AppResult<Payload> {
        self.send(Method::POST, path, &[], Some(body.into())).await
    }

    /// POST without a body
    pub async fn post_empty(&self, path: &str) -> AppResult<Payload> {
        self.send(Method::POST, path, &[], None).await
    }

    pub async fn put(&self, path: &str, body: Option<RequestPayload>) -> AppResult<Payload> {
        self.send(Method::PUT, path, &[], body).await
    }

    /// PUT without a body, parameters in the query string
    pub async fn put_with_query(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> AppResult<Payload> {
        self.send(Method::PUT, path, query, None).await
    }

    pub async fn delete(&self, path: &str) -> AppResult<Payload> {
        self.send(Method::DELETE, path, &[], None).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<RequestPayload>,
    ) -> AppResult<Payload> {
        let url = self.config.url(path);
        tracing::debug!(method = %method, url = %url, "Sending request");

        let mut request = self.client.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        request = match body.map(encode_request_payload) {
            Some(RequestPayload::Document(document)) => request.json(&document),
            Some(RequestPayload::Form(form)) => request.multipart(into_multipart(form)?),
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, method = %method, url = %url, "Request failed");
            AppError::from(e)
        })?;
        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(status = status.as_u16(), url = %url, "Response received");

        interpret_response(status, &text, &self.session)
    }
}

/// Turn a status and raw body into the unwrapped, normalized payload
pub(crate) fn interpret_response(
    status: StatusCode,
    body: &str,
    session: &SessionContext,
) -> AppResult<Payload> {
    if status == StatusCode::UNAUTHORIZED {
        tracing::warn!("Backend rejected the session, clearing it");
        session.clear();
        return Err(AppError::unauthorized("Session expired or invalid")
            .with_action("Please sign in again"));
    }
    if status == StatusCode::FORBIDDEN {
        return Err(AppError::forbidden("Access denied"));
    }
    if !status.is_success() {
        return Err(status_error(status, body));
    }

    let document = parse_trusted_json(body)?;
    unwrap_envelope(document)
}

/// Error for a non-success status, using the envelope message when present
fn status_error(status: StatusCode, body: &str) -> AppError {
    let kind = ErrorKind::from_status(status.as_u16());
    let message = match parse_backend_response(body) {
        envelope @ Payload::Object(_) => envelope
            .get("message")
            .and_then(Payload::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string),
        _ => None,
    }
    .unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string()
    });
    tracing::warn!(status = status.as_u16(), kind = %kind, "Request unsuccessful");
    AppError::new(kind, message)
}

/// Unwrap a `{code, message, data}` envelope
///
/// Code 200, as a number or a decimal string, yields the normalized `data`.
/// Any other code is a rejection carrying the backend message.
pub fn unwrap_envelope(mut document: Payload) -> AppResult<Payload> {
    if !matches!(document, Payload::Object(_)) {
        return Err(AppError::malformed(format!(
            "Expected a response envelope, got {}",
            document.type_name()
        )));
    }

    let code = document.get("code").and_then(envelope_code);
    if code == Some(SUCCESS_CODE) {
        let data = document.take("data").unwrap_or_default();
        return Ok(decode_response_payload(data));
    }

    let message = document
        .get("message")
        .and_then(Payload::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_REJECTION)
        .to_string();
    tracing::warn!(code = ?code, message = %message, "Backend rejected the request");
    let err = AppError::rejected(message);
    Err(match code {
        Some(code) => err.with_backend_code(code),
        None => err,
    })
}

fn envelope_code(code: &Payload) -> Option<i64> {
    match code {
        Payload::Number(n) if n.is_finite() && n.fract() == 0.0 => Some(*n as i64),
        Payload::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Build a multipart body; text parts carry the decimal string of the value
fn into_multipart(form: FormData) -> AppResult<Form> {
    let mut multipart = Form::new();
    for (name, value) in form.into_entries() {
        multipart = match value {
            FormValue::Value(Payload::Null) => continue,
            FormValue::Value(value) => multipart.text(name, form_text(value)),
            FormValue::File(file) => {
                let mut part = Part::bytes(file.bytes).file_name(file.file_name);
                if let Some(content_type) = file.content_type {
                    part = part.mime_str(&content_type).map_err(|e| {
                        AppError::bad_request(format!("Invalid content type: {content_type}"))
                            .with_source(e)
                    })?;
                }
                multipart.part(name, part)
            }
        };
    }
    Ok(multipart)
}

fn form_text(value: Payload) -> String {
    match to_decimal_string(value) {
        Payload::String(s) => s,
        other => other.to_string(),
    }
}
