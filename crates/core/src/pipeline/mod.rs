pub mod pipeline_logger;
pub mod process_file_use_case;
pub mod translate_speech_use_case;
