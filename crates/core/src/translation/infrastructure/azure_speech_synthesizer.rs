use std::sync::Arc;

use crate::http::domain::http_message::HttpRequest;
use crate::http::domain::http_transport::HttpTransport;
use crate::http::json_client::post_for_bytes;
use crate::shared::azure_config::AzureConfig;
use crate::shared::constants::{
    OUTPUT_FORMAT_HEADER, SSML_CONTENT_TYPE, SUBSCRIPTION_KEY_HEADER, SYNTHESIS_OUTPUT_FORMAT,
};
use crate::shared::service_error::{ServiceError, Stage};
use crate::translation::domain::speech_synthesizer::SpeechSynthesizer;
use crate::translation::domain::ssml::SsmlDocument;

/// Text-to-speech via the Azure Speech REST API, producing 16 kHz mono MP3.
pub struct AzureSpeechSynthesizer {
    transport: Arc<dyn HttpTransport>,
    endpoint: String,
    key: String,
}

impl AzureSpeechSynthesizer {
    pub fn new(transport: Arc<dyn HttpTransport>, endpoint: &str, key: &str) -> Self {
        Self {
            transport,
            endpoint: endpoint.to_string(),
            key: key.to_string(),
        }
    }

    pub fn from_config(transport: Arc<dyn HttpTransport>, config: &AzureConfig) -> Self {
        Self::new(transport, &config.synthesis_endpoint, &config.speech.key)
    }
}

impl SpeechSynthesizer for AzureSpeechSynthesizer {
    fn synthesize(&self, document: &SsmlDocument) -> Result<Vec<u8>, ServiceError> {
        let request = HttpRequest::post_bytes(
            &self.endpoint,
            SSML_CONTENT_TYPE,
            document.as_str().as_bytes().to_vec(),
        )
        .header(SUBSCRIPTION_KEY_HEADER, self.key.as_str())
        .header(OUTPUT_FORMAT_HEADER, SYNTHESIS_OUTPUT_FORMAT);

        log::debug!("Synthesizing with voice {}", document.voice().name);
        let audio = post_for_bytes(self.transport.as_ref(), &request)
            .map_err(|e| ServiceError::from_http(Stage::Synthesis, e))?;
        if audio.is_empty() {
            return Err(ServiceError::invalid_response(
                Stage::Synthesis,
                "service returned no audio",
            ));
        }
        Ok(audio)
    }
}
