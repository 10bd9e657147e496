use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::http::domain::http_message::{HttpRequest, HttpResponse, RequestBody};
use crate::http::domain::http_transport::{HttpTransport, TransportError};
use crate::shared::constants::DEFAULT_HTTP_TIMEOUT_SECS;

/// Blocking transport backed by `reqwest`.
///
/// One client is shared by every service so connections can be reused
/// across the requests of a session.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Setup(e.to_string()))?;
        Ok(Self { client })
    }

    pub fn with_default_timeout() -> Result<Self, TransportError> {
        Self::new(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS))
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.client.post(&request.url).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = match &request.body {
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Bytes { content_type, data } => builder
                .header(CONTENT_TYPE, content_type.as_str())
                .body(data.clone()),
        };

        let response = builder
            .send()
            .map_err(|e| TransportError::Connection(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| TransportError::Connection(e.to_string()))?;
        log::debug!("POST {} -> {status} ({} bytes)", request.url, body.len());

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
