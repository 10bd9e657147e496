use std::path::PathBuf;

use crate::pipeline::pipeline_logger::{timed, PipelineLogger};
use crate::shared::service_error::{ServiceError, Stage};
use crate::translation::domain::audio_store::AudioStore;
use crate::translation::domain::language_detector::LanguageDetector;
use crate::translation::domain::speech_synthesizer::SpeechSynthesizer;
use crate::translation::domain::ssml::SsmlDocument;
use crate::translation::domain::translator::Translator;
use crate::translation::domain::voice::voice_for;

/// Result of translating a text and voicing the translation.
///
/// `translation` is absent only when `error` is present. Both are present
/// when translation succeeded but synthesis or storing its audio failed;
/// `audio_path` is present only when every step succeeded.
#[derive(Clone, Debug, PartialEq)]
pub struct TranslationOutcome {
    pub translation: Option<String>,
    pub audio_path: Option<PathBuf>,
    pub error: Option<ServiceError>,
}

impl TranslationOutcome {
    pub fn failed(error: ServiceError) -> Self {
        Self {
            translation: None,
            audio_path: None,
            error: Some(error),
        }
    }

    pub fn without_audio(translation: String, error: ServiceError) -> Self {
        Self {
            translation: Some(translation),
            audio_path: None,
            error: Some(error),
        }
    }

    pub fn complete(translation: String, audio_path: PathBuf) -> Self {
        Self {
            translation: Some(translation),
            audio_path: Some(audio_path),
            error: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Detect → translate → synthesize → store, stopping at the first failure.
pub struct TranslateSpeechUseCase {
    detector: Box<dyn LanguageDetector>,
    translator: Box<dyn Translator>,
    synthesizer: Box<dyn SpeechSynthesizer>,
    store: Box<dyn AudioStore>,
}

impl TranslateSpeechUseCase {
    pub fn new(
        detector: Box<dyn LanguageDetector>,
        translator: Box<dyn Translator>,
        synthesizer: Box<dyn SpeechSynthesizer>,
        store: Box<dyn AudioStore>,
    ) -> Self {
        Self {
            detector,
            translator,
            synthesizer,
            store,
        }
    }

    pub fn execute(
        &self,
        text: &str,
        to_lang: &str,
        logger: &mut dyn PipelineLogger,
    ) -> TranslationOutcome {
        if text.trim().is_empty() {
            return TranslationOutcome::failed(ServiceError::EmptyText);
        }

        // 1. Detect the source language
        let source = match timed(logger, Stage::Detection, || self.detector.detect(text)) {
            Ok(detected) => detected.language,
            Err(e) => {
                logger.failure(Stage::Detection);
                return TranslationOutcome::failed(e);
            }
        };

        // 2. Translate
        let translation = match timed(logger, Stage::Translation, || {
            self.translator.translate(text, &source, to_lang)
        })
        .and_then(|t| {
            if t.trim().is_empty() {
                Err(ServiceError::invalid_response(
                    Stage::Translation,
                    "empty translation",
                ))
            } else {
                Ok(t)
            }
        }) {
            Ok(t) => t,
            Err(e) => {
                logger.failure(Stage::Translation);
                return TranslationOutcome::failed(e);
            }
        };
        logger.info(&format!("Translated {source} -> {to_lang}"));

        // 3. Synthesize, falling back to the default voice for unmapped codes
        let document = SsmlDocument::new(&translation, voice_for(to_lang));
        let audio = match timed(logger, Stage::Synthesis, || {
            self.synthesizer.synthesize(&document)
        }) {
            Ok(a) => a,
            Err(e) => {
                logger.failure(Stage::Synthesis);
                return TranslationOutcome::without_audio(translation, e);
            }
        };

        // 4. Persist the audio
        match self.store.store(&audio) {
            Ok(path) => TranslationOutcome::complete(translation, path),
            Err(e) => {
                logger.failure(Stage::Synthesis);
                TranslationOutcome::without_audio(translation, e)
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::stubs::*;
    use super::*;
    use crate::pipeline::pipeline_logger::{NullPipelineLogger, StdoutPipelineLogger};
    use rstest::rstest;

    fn http_error(stage: Stage, status: u16) -> ServiceError {
        ServiceError::Http {
            stage,
            status,
            body: "error".to_string(),
        }
    }

    fn use_case(
        detector: StubDetector,
        translator: StubTranslator,
        synthesizer: StubSynthesizer,
        store: StubStore,
    ) -> TranslateSpeechUseCase {
        TranslateSpeechUseCase::new(
            Box::new(detector),
            Box::new(translator),
            Box::new(synthesizer),
            Box::new(store),
        )
    }

    #[rstest]
    #[case::empty("")]
    #[case::spaces("   ")]
    #[case::whitespace("\n\t \r\n")]
    fn test_blank_text_fails_without_calls(#[case] text: &str) {
        let detector = StubDetector::ok("es");
        let detect_calls = detector.calls.clone();
        let translator = StubTranslator::ok("hello");
        let translate_calls = translator.calls.clone();
        let synthesizer = StubSynthesizer::ok(b"mp3");
        let documents = synthesizer.documents.clone();
        let uc = use_case(detector, translator, synthesizer, StubStore::new());

        let outcome = uc.execute(text, "en", &mut NullPipelineLogger);

        assert_eq!(outcome.translation, None);
        assert_eq!(outcome.audio_path, None);
        assert_eq!(outcome.error, Some(ServiceError::EmptyText));
        assert_eq!(outcome.error.unwrap().to_payload()["error"], "empty_text");
        assert!(detect_calls.lock().unwrap().is_empty());
        assert!(translate_calls.lock().unwrap().is_empty());
        assert!(documents.lock().unwrap().is_empty());
    }

    #[test]
    fn test_full_success() {
        let translator = StubTranslator::ok("Good morning");
        let calls = translator.calls.clone();
        let store = StubStore::new();
        let stored = store.stored.clone();
        let uc = use_case(
            StubDetector::ok("es"),
            translator,
            StubSynthesizer::ok(b"ID3"),
            store,
        );

        let outcome = uc.execute("Buenos días", "en", &mut NullPipelineLogger);

        assert!(outcome.is_complete());
        assert_eq!(outcome.translation.as_deref(), Some("Good morning"));
        assert_eq!(outcome.audio_path, Some(PathBuf::from("translation-1.mp3")));
        assert_eq!(
            calls.lock().unwrap()[0],
            ("Buenos días".to_string(), "es".to_string(), "en".to_string())
        );
        assert_eq!(stored.lock().unwrap()[0], b"ID3".to_vec());
    }

    #[rstest]
    #[case::mapped("de", "de-DE-KatjaNeural", "de-DE")]
    #[case::unmapped("ja", "en-US-AriaNeural", "en-US")]
    #[case::unknown("xx", "en-US-AriaNeural", "en-US")]
    fn test_synthesis_document_uses_destination_voice(
        #[case] to: &str,
        #[case] voice: &str,
        #[case] locale: &str,
    ) {
        let synthesizer = StubSynthesizer::ok(b"ID3");
        let documents = synthesizer.documents.clone();
        let uc = use_case(
            StubDetector::ok("es"),
            StubTranslator::ok("translated"),
            synthesizer,
            StubStore::new(),
        );

        uc.execute("hola", to, &mut NullPipelineLogger);

        let documents = documents.lock().unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].text(), "translated");
        assert_eq!(documents[0].voice().name, voice);
        assert_eq!(documents[0].voice().locale, locale);
    }

    #[test]
    fn test_detection_failure_stops_pipeline() {
        let translator = StubTranslator::ok("x");
        let calls = translator.calls.clone();
        let uc = use_case(
            StubDetector::err(http_error(Stage::Detection, 401)),
            translator,
            StubSynthesizer::ok(b"x"),
            StubStore::new(),
        );

        let outcome = uc.execute("hola", "en", &mut NullPipelineLogger);

        assert_eq!(outcome.translation, None);
        assert_eq!(outcome.audio_path, None);
        assert_eq!(outcome.error.unwrap().status(), Some(401));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_translation_failure_stops_pipeline() {
        let synthesizer = StubSynthesizer::ok(b"x");
        let documents = synthesizer.documents.clone();
        let uc = use_case(
            StubDetector::ok("es"),
            StubTranslator::err(http_error(Stage::Translation, 400)),
            synthesizer,
            StubStore::new(),
        );

        let outcome = uc.execute("hola", "en", &mut NullPipelineLogger);

        assert_eq!(outcome.translation, None);
        assert_eq!(outcome.error.unwrap().status(), Some(400));
        assert!(documents.lock().unwrap().is_empty());
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace("  \n")]
    fn test_empty_translation_is_a_translation_failure(#[case] translated: &str) {
        let synthesizer = StubSynthesizer::ok(b"x");
        let documents = synthesizer.documents.clone();
        let uc = use_case(
            StubDetector::ok("es"),
            StubTranslator::ok(translated),
            synthesizer,
            StubStore::new(),
        );
        let mut logger = StdoutPipelineLogger::new();

        let outcome = uc.execute("hola", "en", &mut logger);

        assert_eq!(outcome.translation, None);
        let error = outcome.error.unwrap();
        assert_eq!(error.kind(), "invalid_response");
        assert_eq!(error.stage(), Some(Stage::Translation));
        assert_eq!(logger.failures_for(Stage::Translation), 1);
        assert!(documents.lock().unwrap().is_empty());
    }

    #[test]
    fn test_synthesis_failure_keeps_translation() {
        let store = StubStore::new();
        let stored = store.stored.clone();
        let uc = use_case(
            StubDetector::ok("es"),
            StubTranslator::ok("hello"),
            StubSynthesizer::err(http_error(Stage::Synthesis, 500)),
            store,
        );

        let outcome = uc.execute("hola", "en", &mut NullPipelineLogger);

        assert_eq!(outcome.translation.as_deref(), Some("hello"));
        assert_eq!(outcome.audio_path, None);
        assert_eq!(outcome.error.as_ref().unwrap().status(), Some(500));
        assert!(!outcome.is_complete());
        assert!(stored.lock().unwrap().is_empty());
    }

    #[test]
    fn test_store_failure_keeps_translation() {
        let mut store = StubStore::new();
        store.fail = true;
        let uc = use_case(
            StubDetector::ok("es"),
            StubTranslator::ok("hello"),
            StubSynthesizer::ok(b"ID3"),
            store,
        );

        let mut logger = StdoutPipelineLogger::new();

        let outcome = uc.execute("hola", "en", &mut logger);

        assert_eq!(outcome.translation.as_deref(), Some("hello"));
        assert_eq!(outcome.audio_path, None);
        assert_eq!(outcome.error.unwrap().kind(), "output");
        assert_eq!(logger.failures_for(Stage::Synthesis), 1);
    }

    #[test]
    fn test_logger_records_stage_timings_and_failures() {
        let uc = use_case(
            StubDetector::ok("es"),
            StubTranslator::ok("hello"),
            StubSynthesizer::err(http_error(Stage::Synthesis, 503)),
            StubStore::new(),
        );
        let mut logger = StdoutPipelineLogger::new();

        uc.execute("hola", "en", &mut logger);

        assert!(logger.timings_for(Stage::Detection).is_some());
        assert!(logger.timings_for(Stage::Translation).is_some());
        assert!(logger.timings_for(Stage::Synthesis).is_some());
        assert_eq!(logger.failures_for(Stage::Synthesis), 1);
    }
}
