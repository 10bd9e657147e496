use thiserror::Error;

use super::http_message::{HttpRequest, HttpResponse};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("failed to set up HTTP client: {0}")]
    Setup(String),
}

/// Domain interface for issuing a blocking POST.
///
/// Implementations return every response the server produced, whatever its
/// status; only failures to get a response at all are errors.
pub trait HttpTransport: Send + Sync {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}
