pub mod azure_speech_synthesizer;
pub mod azure_translator;
pub mod file_audio_store;
