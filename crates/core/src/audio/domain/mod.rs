pub mod audio_clip;
pub mod speech_recognizer;
pub mod transcript;
