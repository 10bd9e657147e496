pub const RECOGNITION_SAMPLE_RATE: u32 = 16000;
pub const RECOGNITION_CHANNELS: u16 = 1;
pub const DEFAULT_RECOGNITION_LANGUAGE: &str = "es-ES";
pub const DEFAULT_DESTINATION_CODE: &str = "en";

/// Segment offsets and durations are reported in 100-nanosecond ticks.
pub const TICKS_PER_SECOND: f64 = 10_000_000.0;

pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

pub const TRANSLATOR_ENDPOINT: &str = "https://api.cognitive.microsofttranslator.com";
pub const TRANSLATOR_API_VERSION: &str = "3.0";

pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
pub const SUBSCRIPTION_REGION_HEADER: &str = "Ocp-Apim-Subscription-Region";
pub const TRACE_ID_HEADER: &str = "X-ClientTraceId";
pub const OUTPUT_FORMAT_HEADER: &str = "X-Microsoft-OutputFormat";

pub const RECOGNITION_CONTENT_TYPE: &str = "audio/wav; codecs=audio/pcm; samplerate=16000";
pub const SSML_CONTENT_TYPE: &str = "application/ssml+xml";
pub const SYNTHESIS_OUTPUT_FORMAT: &str = "audio-16khz-128kbitrate-mono-mp3";
pub const SYNTHESIS_FILE_PREFIX: &str = "translation";
pub const SYNTHESIS_FILE_EXTENSION: &str = "mp3";

pub const HISTORY_CSV_FILENAME: &str = "historial_transcripciones.csv";
pub const AUDIO_EXTENSIONS: &[&str] = &["wav"];
