use std::sync::Arc;

use serde_json::{json, Value};

use crate::http::domain::http_message::HttpRequest;
use crate::http::domain::http_transport::HttpTransport;
use crate::http::json_client::post_json;
use crate::shared::azure_config::AzureConfig;
use crate::shared::constants::{
    SUBSCRIPTION_KEY_HEADER, SUBSCRIPTION_REGION_HEADER, TRANSLATOR_API_VERSION,
};
use crate::shared::service_error::{ServiceError, Stage};
use crate::translation::domain::language_detector::{DetectedLanguage, LanguageDetector};
use crate::translation::domain::translator::Translator;

/// Client for the Azure Translator v3 `detect` and `translate` operations.
pub struct AzureTranslator {
    transport: Arc<dyn HttpTransport>,
    endpoint: String,
    key: String,
    region: String,
}

impl AzureTranslator {
    pub fn new(transport: Arc<dyn HttpTransport>, endpoint: &str, key: &str, region: &str) -> Self {
        Self {
            transport,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            key: key.to_string(),
            region: region.to_string(),
        }
    }

    pub fn from_config(transport: Arc<dyn HttpTransport>, config: &AzureConfig) -> Self {
        Self::new(
            transport,
            &config.translator_endpoint,
            &config.translator.key,
            &config.translator.region,
        )
    }

    fn request(&self, operation: &str, text: &str) -> HttpRequest {
        HttpRequest::post_json(
            format!("{}/{operation}", self.endpoint),
            json!([{ "text": text }]),
        )
        .query("api-version", TRANSLATOR_API_VERSION)
        .header(SUBSCRIPTION_KEY_HEADER, self.key.as_str())
        .header(SUBSCRIPTION_REGION_HEADER, self.region.as_str())
    }
}

impl LanguageDetector for AzureTranslator {
    fn detect(&self, text: &str) -> Result<DetectedLanguage, ServiceError> {
        if text.trim().is_empty() {
            return Err(ServiceError::EmptyText);
        }

        let raw = post_json(self.transport.as_ref(), &self.request("detect", text))
            .map_err(|e| ServiceError::from_http(Stage::Detection, e))?;
        let language = raw
            .get(0)
            .and_then(|item| item.get("language"))
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ServiceError::invalid_response(Stage::Detection, "missing [0].language")
            })?
            .to_string();

        log::debug!("Detected language '{language}'");
        Ok(DetectedLanguage { language, raw })
    }
}

impl Translator for AzureTranslator {
    fn translate(&self, text: &str, from: &str, to: &str) -> Result<String, ServiceError> {
        let request = self
            .request("translate", text)
            .query("from", from)
            .query("to", to);

        let raw = post_json(self.transport.as_ref(), &request)
            .map_err(|e| ServiceError::from_http(Stage::Translation, e))?;
        let translation = raw
            .get(0)
            .and_then(|item| item.get("translations"))
            .and_then(|translations| translations.get(0))
            .and_then(|first| first.get("text"))
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ServiceError::invalid_response(
                    Stage::Translation,
                    "missing [0].translations[0].text",
                )
            })?;
        if translation.trim().is_empty() {
            return Err(ServiceError::invalid_response(
                Stage::Translation,
                "empty translation",
            ));
        }
        Ok(translation.to_string())
    }
}
