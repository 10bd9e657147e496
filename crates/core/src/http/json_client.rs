use serde_json::Value;
use thiserror::Error;

use super::domain::http_message::HttpRequest;
use super::domain::http_transport::{HttpTransport, TransportError};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HttpError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid JSON response: {0}")]
    Decode(String),
}

/// POST and return the raw body, failing on any non-2xx status.
pub fn post_for_bytes(
    transport: &dyn HttpTransport,
    request: &HttpRequest,
) -> Result<Vec<u8>, HttpError> {
    let response = transport.send(request)?;
    if !response.is_success() {
        log::warn!("POST {} failed with HTTP {}", request.url, response.status);
        return Err(HttpError::Status {
            status: response.status,
            body: response.text(),
        });
    }
    Ok(response.body)
}

/// POST and parse the body as JSON, failing on any non-2xx status.
pub fn post_json(transport: &dyn HttpTransport, request: &HttpRequest) -> Result<Value, HttpError> {
    let body = post_for_bytes(transport, request)?;
    serde_json::from_slice(&body).map_err(|e| HttpError::Decode(e.to_string()))
}
