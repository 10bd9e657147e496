pub mod audio_store;
pub mod language_detector;
pub mod speech_synthesizer;
pub mod ssml;
pub mod translator;
pub mod voice;
