use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

use crate::audio::domain::audio_clip::AudioClip;
use crate::audio::domain::speech_recognizer::SpeechRecognizer;
use crate::audio::domain::transcript::{SubtitleLine, Transcription};
use crate::history::domain::history_record::HistoryRecord;
use crate::history::domain::session_history::SessionHistory;
use crate::pipeline::pipeline_logger::{timed, NullPipelineLogger, PipelineLogger};
use crate::pipeline::translate_speech_use_case::TranslateSpeechUseCase;
use crate::shared::languages::DestinationLanguage;
use crate::shared::service_error::{ServiceError, Stage};
use crate::translation::domain::language_detector::LanguageDetector;

/// Everything produced for one successfully translated file.
#[derive(Clone, Debug, PartialEq)]
pub struct FileReport {
    pub file_name: String,
    pub transcription: Transcription,
    pub detected_language: Option<String>,
    /// Timed lines when the recognizer returned segments.
    pub subtitles: Option<Vec<SubtitleLine>>,
    pub destination: DestinationLanguage,
    pub translation: String,
    pub audio_path: Option<PathBuf>,
    /// Set when translation succeeded but no audio could be produced.
    pub synthesis_error: Option<ServiceError>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProcessError {
    #[error("transcription failed: {0}")]
    Transcription(ServiceError),
    #[error("no speech recognized in {file_name}")]
    NoSpeech { file_name: String, raw: Value },
    #[error("translation failed: {0}")]
    Translation(ServiceError),
}

impl ProcessError {
    /// Structured payload for display: the service error payload, or the raw
    /// recognition response when nothing was recognized.
    pub fn payload(&self) -> Value {
        match self {
            ProcessError::Transcription(e) | ProcessError::Translation(e) => e.to_payload(),
            ProcessError::NoSpeech { raw, .. } => raw.clone(),
        }
    }
}

/// Transcribe → detect → translate + synthesize → record, for one file.
///
/// Detection failure is not fatal: the file is still translated and the
/// history row carries no detected language.
pub struct ProcessFileUseCase {
    recognizer: Box<dyn SpeechRecognizer>,
    detector: Box<dyn LanguageDetector>,
    translate: TranslateSpeechUseCase,
    recognition_language: String,
    logger: Box<dyn PipelineLogger>,
}

impl ProcessFileUseCase {
    pub fn new(
        recognizer: Box<dyn SpeechRecognizer>,
        detector: Box<dyn LanguageDetector>,
        translate: TranslateSpeechUseCase,
        recognition_language: &str,
        logger: Option<Box<dyn PipelineLogger>>,
    ) -> Self {
        Self {
            recognizer,
            detector,
            translate,
            recognition_language: recognition_language.to_string(),
            logger: logger.unwrap_or_else(|| Box::new(NullPipelineLogger)),
        }
    }

    pub fn progress(&mut self, current: usize, total: usize) {
        self.logger.progress(current, total);
    }

    pub fn execute(
        &mut self,
        clip: &AudioClip,
        destination: DestinationLanguage,
        history: &mut SessionHistory,
    ) -> Result<FileReport, ProcessError> {
        if let Some(format) = clip.wav_format() {
            if !format.is_recognition_format() {
                log::warn!(
                    "{} is {} Hz / {} channel(s); recognition expects 16000 Hz mono",
                    clip.name(),
                    format.sample_rate,
                    format.channels
                );
            }
        }

        // 1. Transcribe
        let language = self.recognition_language.as_str();
        let transcription = timed(self.logger.as_mut(), Stage::Recognition, || {
            self.recognizer.transcribe(clip, language)
        })
        .map_err(|e| {
            self.logger.failure(Stage::Recognition);
            ProcessError::Transcription(e)
        })?;
        if transcription.is_blank() {
            return Err(ProcessError::NoSpeech {
                file_name: clip.name().to_string(),
                raw: transcription.raw,
            });
        }
        self.logger
            .info(&format!("Transcribed {} ({} chars)", clip.name(), transcription.text.len()));

        // 2. Detect the spoken language
        let text = transcription.text.as_str();
        let detected_language =
            match timed(self.logger.as_mut(), Stage::Detection, || self.detector.detect(text)) {
                Ok(detected) => Some(detected.language),
                Err(e) => {
                    self.logger.failure(Stage::Detection);
                    log::warn!("Language detection failed for {}: {e}", clip.name());
                    None
                }
            };

        // 3. Timestamp table, when the recognizer returned segments
        let subtitles = transcription.subtitle_lines();
        if subtitles.is_none() {
            log::debug!("No segment timestamps returned for {}", clip.name());
        }

        // 4. Translate and synthesize
        let outcome = self
            .translate
            .execute(&transcription.text, destination.code, self.logger.as_mut());
        let (translation, synthesis_error) = match (outcome.translation, outcome.error) {
            (Some(translation), error) => {
                if let Some(ref e) = error {
                    log::warn!("Speech synthesis failed for {}: {e}", clip.name());
                }
                (translation, error)
            }
            (None, error) => {
                return Err(ProcessError::Translation(
                    error.unwrap_or(ServiceError::EmptyText),
                ))
            }
        };

        // 5. Record
        history.push(HistoryRecord {
            file_name: clip.name().to_string(),
            original_text: transcription.text.clone(),
            detected_language: detected_language.clone(),
            destination_label: destination.label.to_string(),
            translation: translation.clone(),
        });

        Ok(FileReport {
            file_name: clip.name().to_string(),
            transcription,
            detected_language,
            subtitles,
            destination,
            translation,
            audio_path: outcome.audio_path,
            synthesis_error,
        })
    }

    /// Emit the logger's end-of-session summary.
    pub fn finish(&self) {
        self.logger.summary();
    }
}
