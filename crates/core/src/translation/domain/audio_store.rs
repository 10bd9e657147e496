use std::path::PathBuf;

use crate::shared::service_error::ServiceError;

/// Domain interface for persisting synthesized audio.
pub trait AudioStore: Send {
    /// Persist the audio and return where it was written.
    fn store(&self, audio: &[u8]) -> Result<PathBuf, ServiceError>;
}
