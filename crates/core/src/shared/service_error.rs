use std::fmt;
use std::path::PathBuf;

use serde_json::{json, Value};
use thiserror::Error;

use crate::http::json_client::HttpError;

/// Remote call a failure originated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Recognition,
    Detection,
    Translation,
    Synthesis,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Recognition => "recognition",
            Stage::Detection => "detection",
            Stage::Translation => "translation",
            Stage::Synthesis => "synthesis",
        }
    }

    /// Payload kind reported when this stage cannot reach its service.
    pub fn connection_kind(&self) -> &'static str {
        match self {
            Stage::Recognition => "connection",
            Stage::Detection => "detect_connection",
            Stage::Translation => "translation_connection",
            Stage::Synthesis => "tts_connection",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a single remote step, returned to the caller as data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error("{stage} request failed: {message}")]
    Connection { stage: Stage, message: String },
    #[error("{stage} service returned HTTP {status}: {body}")]
    Http {
        stage: Stage,
        status: u16,
        body: String,
    },
    #[error("{stage} service returned an unexpected response: {message}")]
    InvalidResponse { stage: Stage, message: String },
    #[error("text is empty")]
    EmptyText,
    #[error("failed to write {}: {message}", .path.display())]
    Output { path: PathBuf, message: String },
}

impl ServiceError {
    pub fn from_http(stage: Stage, error: HttpError) -> Self {
        match error {
            HttpError::Transport(e) => ServiceError::Connection {
                stage,
                message: e.to_string(),
            },
            HttpError::Status { status, body } => ServiceError::Http {
                stage,
                status,
                body,
            },
            HttpError::Decode(message) => ServiceError::InvalidResponse { stage, message },
        }
    }

    pub fn invalid_response(stage: Stage, message: impl Into<String>) -> Self {
        ServiceError::InvalidResponse {
            stage,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Connection { stage, .. } => stage.connection_kind(),
            ServiceError::Http { .. } => "http",
            ServiceError::InvalidResponse { .. } => "invalid_response",
            ServiceError::EmptyText => "empty_text",
            ServiceError::Output { .. } => "output",
        }
    }

    pub fn stage(&self) -> Option<Stage> {
        match self {
            ServiceError::Connection { stage, .. }
            | ServiceError::Http { stage, .. }
            | ServiceError::InvalidResponse { stage, .. } => Some(*stage),
            ServiceError::EmptyText | ServiceError::Output { .. } => None,
        }
    }

    /// HTTP status of the failed response, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ServiceError::Connection { message, .. }
            | ServiceError::InvalidResponse { message, .. } => message.clone(),
            ServiceError::Http { body, .. } => body.clone(),
            ServiceError::EmptyText | ServiceError::Output { .. } => self.to_string(),
        }
    }

    /// `{"error": ..., "message": ...}`, with the numeric status as `error`
    /// for HTTP failures and the kind string otherwise.
    pub fn to_payload(&self) -> Value {
        let error = match self.status() {
            Some(status) => json!(status),
            None => json!(self.kind()),
        };
        json!({ "error": error, "message": self.message() })
    }
}
