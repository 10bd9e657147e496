pub mod azure_speech_recognizer;
pub mod srt_writer;
