use super::audio_clip::AudioClip;
use super::transcript::Transcription;
use crate::shared::service_error::ServiceError;

/// Domain interface for speech-to-text transcription.
///
/// `language` is a BCP-47 tag such as `es-ES` selecting the recognition model.
pub trait SpeechRecognizer: Send {
    fn transcribe(&self, audio: &AudioClip, language: &str)
        -> Result<Transcription, ServiceError>;
}
