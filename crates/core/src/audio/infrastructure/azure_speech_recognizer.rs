use std::sync::Arc;

use uuid::Uuid;

use crate::audio::domain::audio_clip::AudioClip;
use crate::audio::domain::speech_recognizer::SpeechRecognizer;
use crate::audio::domain::transcript::Transcription;
use crate::http::domain::http_message::HttpRequest;
use crate::http::domain::http_transport::HttpTransport;
use crate::http::json_client::post_json;
use crate::shared::azure_config::AzureConfig;
use crate::shared::constants::{
    RECOGNITION_CONTENT_TYPE, SUBSCRIPTION_KEY_HEADER, TRACE_ID_HEADER,
};
use crate::shared::service_error::{ServiceError, Stage};

/// Speech recognizer using the Azure Speech short-audio REST API.
///
/// The whole clip is uploaded in one request; each request carries a fresh
/// trace id so it can be correlated in the service logs.
pub struct AzureSpeechRecognizer {
    transport: Arc<dyn HttpTransport>,
    endpoint: String,
    key: String,
}

impl AzureSpeechRecognizer {
    pub fn new(transport: Arc<dyn HttpTransport>, endpoint: &str, key: &str) -> Self {
        Self {
            transport,
            endpoint: endpoint.to_string(),
            key: key.to_string(),
        }
    }

    pub fn from_config(transport: Arc<dyn HttpTransport>, config: &AzureConfig) -> Self {
        Self::new(transport, &config.recognition_endpoint, &config.speech.key)
    }
}

impl SpeechRecognizer for AzureSpeechRecognizer {
    fn transcribe(
        &self,
        audio: &AudioClip,
        language: &str,
    ) -> Result<Transcription, ServiceError> {
        let trace_id = Uuid::new_v4().to_string();
        let request =
            HttpRequest::post_bytes(&self.endpoint, RECOGNITION_CONTENT_TYPE, audio.bytes().to_vec())
                .header(SUBSCRIPTION_KEY_HEADER, self.key.as_str())
                .header(TRACE_ID_HEADER, trace_id.as_str())
                .query("language", language);

        log::debug!(
            "Recognizing {} ({} bytes, {language}), trace id {trace_id}",
            audio.name(),
            audio.len()
        );
        let raw = post_json(self.transport.as_ref(), &request)
            .map_err(|e| ServiceError::from_http(Stage::Recognition, e))?;

        Ok(Transcription::from_response(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::domain::http_message::RequestBody;
    use crate::http::stub::StubTransport;
    use serde_json::json;

    const ENDPOINT: &str = "https://westeurope.stt.speech.microsoft.com/speech/recognition/conversation/cognitiveservices/v1";

    fn clip() -> AudioClip {
        AudioClip::new("saludo.wav", vec![0x52, 0x49, 0x46, 0x46]).unwrap()
    }

    fn recognizer(transport: StubTransport) -> AzureSpeechRecognizer {
        AzureSpeechRecognizer::new(Arc::new(transport), ENDPOINT, "speech-key")
    }

    #[test]
    fn test_transcribe_returns_text_and_raw() {
        let body = json!({ "RecognitionStatus": "Success", "DisplayText": "Hola." });
        let rec = recognizer(StubTransport::new().respond_json(200, &body));
        let t = rec.transcribe(&clip(), "es-ES").unwrap();
        assert_eq!(t.text, "Hola.");
        assert_eq!(t.raw, body);
    }

    #[test]
    fn test_request_shape() {
        let transport = StubTransport::new().respond_json(200, &json!({ "DisplayText": "x" }));
        let requests = transport.requests();
        recognizer(transport).transcribe(&clip(), "fr-FR").unwrap();

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let req = &requests[0];
        assert_eq!(req.url, ENDPOINT);
        assert_eq!(req.query_value("language"), Some("fr-FR"));
        assert_eq!(req.header_value(SUBSCRIPTION_KEY_HEADER), Some("speech-key"));
        let trace_id = req.header_value(TRACE_ID_HEADER).unwrap();
        assert!(Uuid::parse_str(trace_id).is_ok());
        match &req.body {
            RequestBody::Bytes { content_type, data } => {
                assert_eq!(content_type, RECOGNITION_CONTENT_TYPE);
                assert_eq!(data, clip().bytes());
            }
            RequestBody::Json(_) => panic!("audio must be sent as a binary body"),
        }
    }

    #[test]
    fn test_trace_id_differs_per_request() {
        let body = json!({ "DisplayText": "x" });
        let transport = StubTransport::new()
            .respond_json(200, &body)
            .respond_json(200, &body);
        let requests = transport.requests();
        let rec = recognizer(transport);
        rec.transcribe(&clip(), "es-ES").unwrap();
        rec.transcribe(&clip(), "es-ES").unwrap();

        let requests = requests.lock().unwrap();
        assert_ne!(
            requests[0].header_value(TRACE_ID_HEADER),
            requests[1].header_value(TRACE_ID_HEADER)
        );
    }

    #[test]
    fn test_http_error_captures_status_and_body() {
        let rec = recognizer(StubTransport::new().respond(401, "Access denied"));
        let err = rec.transcribe(&clip(), "es-ES").unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert_eq!(
            err.to_payload(),
            json!({ "error": 401, "message": "Access denied" })
        );
    }

    #[test]
    fn test_connection_error_kind() {
        let rec = recognizer(StubTransport::new().fail("connection refused"));
        let err = rec.transcribe(&clip(), "es-ES").unwrap_err();
        assert_eq!(err.kind(), "connection");
        assert_eq!(err.stage(), Some(Stage::Recognition));
    }

    #[test]
    fn test_no_match_yields_empty_text() {
        let rec = recognizer(
            StubTransport::new().respond_json(200, &json!({ "RecognitionStatus": "NoMatch" })),
        );
        let t = rec.transcribe(&clip(), "es-ES").unwrap();
        assert!(t.text.is_empty());
    }
}
