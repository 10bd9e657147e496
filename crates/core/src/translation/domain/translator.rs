use crate::shared::service_error::ServiceError;

/// Domain interface for text translation between two language codes.
pub trait Translator: Send {
    fn translate(&self, text: &str, from: &str, to: &str) -> Result<String, ServiceError>;
}
