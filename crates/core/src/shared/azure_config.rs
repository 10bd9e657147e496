use std::fmt;

use super::constants::TRANSLATOR_ENDPOINT;

/// Subscription key and region for one Azure Cognitive Services resource.
#[derive(Clone, PartialEq, Eq)]
pub struct AzureCredentials {
    pub key: String,
    pub region: String,
}

impl AzureCredentials {
    pub fn new(key: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            key: key.into().trim().to_string(),
            region: region.into().trim().to_string(),
        }
    }
}

// Keys must never end up in logs.
impl fmt::Debug for AzureCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AzureCredentials")
            .field("key", &"<redacted>")
            .field("region", &self.region)
            .finish()
    }
}

/// Credentials and endpoints for the speech and translator resources.
///
/// Endpoints default to the public Azure hosts derived from the speech
/// region; each can be overridden (e.g. for sovereign clouds or a local proxy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AzureConfig {
    pub speech: AzureCredentials,
    pub translator: AzureCredentials,
    pub recognition_endpoint: String,
    pub synthesis_endpoint: String,
    pub translator_endpoint: String,
}

impl AzureConfig {
    pub fn new(speech: AzureCredentials, translator: AzureCredentials) -> Self {
        Self {
            recognition_endpoint: recognition_endpoint(&speech.region),
            synthesis_endpoint: synthesis_endpoint(&speech.region),
            translator_endpoint: TRANSLATOR_ENDPOINT.to_string(),
            speech,
            translator,
        }
    }

    pub fn with_recognition_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.recognition_endpoint = endpoint.into().trim().to_string();
        self
    }

    pub fn with_synthesis_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.synthesis_endpoint = endpoint.into().trim().to_string();
        self
    }

    pub fn with_translator_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.translator_endpoint = endpoint.into().trim().trim_end_matches('/').to_string();
        self
    }
}

pub fn recognition_endpoint(region: &str) -> String {
    format!(
        "https://{region}.stt.speech.microsoft.com/speech/recognition/conversation/cognitiveservices/v1"
    )
}

pub fn synthesis_endpoint(region: &str) -> String {
    format!("https://{region}.tts.speech.microsoft.com/cognitiveservices/v1")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AzureConfig {
        AzureConfig::new(
            AzureCredentials::new("speech-key", "westeurope"),
            AzureCredentials::new("translator-key", "global"),
        )
    }

    #[test]
    fn test_endpoints_derive_from_speech_region() {
        let cfg = config();
        assert_eq!(
            cfg.recognition_endpoint,
            "https://westeurope.stt.speech.microsoft.com/speech/recognition/conversation/cognitiveservices/v1"
        );
        assert_eq!(
            cfg.synthesis_endpoint,
            "https://westeurope.tts.speech.microsoft.com/cognitiveservices/v1"
        );
        assert_eq!(cfg.translator_endpoint, TRANSLATOR_ENDPOINT);
    }

    #[test]
    fn test_translator_override_strips_trailing_slash() {
        let cfg = config().with_translator_endpoint("http://localhost:9000/ ");
        assert_eq!(cfg.translator_endpoint, "http://localhost:9000");
    }

    #[test]
    fn test_credentials_are_trimmed() {
        let creds = AzureCredentials::new("  abc \n", " eastus ");
        assert_eq!(creds.key, "abc");
        assert_eq!(creds.region, "eastus");
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", config());
        assert!(!rendered.contains("speech-key"));
        assert!(!rendered.contains("translator-key"));
        assert!(rendered.contains("<redacted>"));
    }
}
