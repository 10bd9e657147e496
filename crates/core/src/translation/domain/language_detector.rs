use serde_json::Value;

use crate::shared::service_error::ServiceError;

#[derive(Clone, Debug, PartialEq)]
pub struct DetectedLanguage {
    pub language: String,
    pub raw: Value,
}

/// Domain interface for identifying the language of a text.
pub trait LanguageDetector: Send {
    fn detect(&self, text: &str) -> Result<DetectedLanguage, ServiceError>;
}
