use super::ssml::SsmlDocument;
use crate::shared::service_error::ServiceError;

/// Domain interface for text-to-speech. Returns encoded audio bytes.
pub trait SpeechSynthesizer: Send {
    fn synthesize(&self, document: &SsmlDocument) -> Result<Vec<u8>, ServiceError>;
}
