//! Transcribe WAV audio, translate the transcript and voice the translation
//! using Azure Cognitive Services.

pub mod audio;
pub mod history;
pub mod http;
pub mod pipeline;
pub mod shared;
pub mod translation;
