mod display;

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use voxbridge_core::audio::domain::audio_clip::AudioClip;
use voxbridge_core::audio::infrastructure::azure_speech_recognizer::AzureSpeechRecognizer;
use voxbridge_core::audio::infrastructure::srt_writer::export_srt;
use voxbridge_core::history::domain::session_history::SessionHistory;
use voxbridge_core::history::infrastructure::csv_writer::export_csv;
use voxbridge_core::http::domain::http_transport::HttpTransport;
use voxbridge_core::http::infrastructure::reqwest_transport::ReqwestTransport;
use voxbridge_core::pipeline::pipeline_logger::StdoutPipelineLogger;
use voxbridge_core::pipeline::process_file_use_case::{FileReport, ProcessFileUseCase};
use voxbridge_core::pipeline::translate_speech_use_case::TranslateSpeechUseCase;
use voxbridge_core::shared::azure_config::{AzureConfig, AzureCredentials};
use voxbridge_core::shared::constants::{
    AUDIO_EXTENSIONS, DEFAULT_DESTINATION_CODE, DEFAULT_HTTP_TIMEOUT_SECS,
    DEFAULT_RECOGNITION_LANGUAGE, HISTORY_CSV_FILENAME,
};
use voxbridge_core::shared::languages::{find_destination, DestinationLanguage};
use voxbridge_core::translation::infrastructure::azure_speech_synthesizer::AzureSpeechSynthesizer;
use voxbridge_core::translation::infrastructure::azure_translator::AzureTranslator;
use voxbridge_core::translation::infrastructure::file_audio_store::FileAudioStore;

/// Transcribe WAV files, translate the transcript and synthesize the translation.
#[derive(Parser)]
#[command(name = "voxbridge")]
struct Cli {
    /// Input WAV files (mono PCM, 16 kHz).
    #[arg(required_unless_present = "list_languages")]
    inputs: Vec<PathBuf>,

    /// Destination language code or label (see --list-languages).
    #[arg(long, default_value = DEFAULT_DESTINATION_CODE)]
    to: String,

    /// Recognition language of the audio (BCP-47 tag).
    #[arg(long, default_value = DEFAULT_RECOGNITION_LANGUAGE)]
    language: String,

    /// Directory for synthesized MP3 files.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Write the session history as CSV (defaults to historial_transcripciones.csv
    /// when given without a value).
    #[arg(long, num_args = 0..=1, default_missing_value = HISTORY_CSV_FILENAME)]
    export_csv: Option<PathBuf>,

    /// Write an SRT file per input into this directory when timestamps are available.
    #[arg(long)]
    subtitles: Option<PathBuf>,

    /// HTTP timeout in seconds for each remote call.
    #[arg(long, default_value_t = DEFAULT_HTTP_TIMEOUT_SECS)]
    timeout: u64,

    /// Print the supported destination languages and exit.
    #[arg(long)]
    list_languages: bool,

    /// Azure Speech subscription key.
    #[arg(long, env = "SPEECH_KEY", hide_env_values = true)]
    speech_key: Option<String>,

    /// Azure Speech region (e.g. westeurope).
    #[arg(long, env = "SPEECH_REGION")]
    speech_region: Option<String>,

    /// Azure Translator subscription key.
    #[arg(long, env = "TRANSLATOR_KEY", hide_env_values = true)]
    translator_key: Option<String>,

    /// Azure Translator region.
    #[arg(long, env = "TRANSLATOR_REGION")]
    translator_region: Option<String>,

    /// Override the Translator endpoint.
    #[arg(long, env = "TRANSLATOR_ENDPOINT")]
    translator_endpoint: Option<String>,

    /// Override the speech recognition endpoint.
    #[arg(long, env = "SPEECH_STT_ENDPOINT")]
    stt_endpoint: Option<String>,

    /// Override the speech synthesis endpoint.
    #[arg(long, env = "SPEECH_TTS_ENDPOINT")]
    tts_endpoint: Option<String>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.list_languages {
        print!("{}", display::format_languages());
        return Ok(());
    }

    validate(&cli)?;
    let destination = parse_destination(&cli.to)?;
    let config = build_config(&cli)?;
    let transport: Arc<dyn HttpTransport> =
        Arc::new(ReqwestTransport::new(Duration::from_secs(cli.timeout))?);
    let mut use_case = build_use_case(&cli, &config, transport);

    let mut history = SessionHistory::new();
    let total = cli.inputs.len();
    let mut failed = 0;
    for (i, input) in cli.inputs.iter().enumerate() {
        use_case.progress(i + 1, total);
        if !process_input(
            &mut use_case,
            input,
            destination,
            &mut history,
            cli.subtitles.as_deref(),
        ) {
            failed += 1;
        }
    }
    use_case.finish();

    if !history.is_empty() {
        println!("\n## Historial de transcripciones\n");
        print!("{}", display::format_history_table(history.records()));
    }
    if let Some(ref path) = cli.export_csv {
        export_csv(path, history.records())?;
        println!("\nHistory written to {}", path.display());
    }

    if failed > 0 {
        return Err(format!("{failed} of {total} file(s) could not be processed").into());
    }
    Ok(())
}

/// Process one input and print its report. Returns false on failure.
fn process_input(
    use_case: &mut ProcessFileUseCase,
    input: &Path,
    destination: DestinationLanguage,
    history: &mut SessionHistory,
    subtitles_dir: Option<&Path>,
) -> bool {
    println!("\n== {}", input.display());

    let clip = match AudioClip::open(input) {
        Ok(clip) => clip,
        Err(e) => {
            eprintln!("Error: {e}");
            return false;
        }
    };

    match use_case.execute(&clip, destination, history) {
        Ok(report) => {
            print_report(&report);
            if let Some(dir) = subtitles_dir {
                write_subtitles(&report, input, dir);
            }
            true
        }
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&e.payload()).unwrap_or_default()
            );
            false
        }
    }
}

fn print_report(report: &FileReport) {
    println!("Transcription:\n  {}", report.transcription.text);
    match report.detected_language {
        Some(ref lang) => println!("Detected language: {lang}"),
        None => println!("Detected language: unknown"),
    }

    match report.subtitles {
        Some(ref lines) => {
            println!("\nTimestamps:");
            print!("{}", display::format_subtitle_table(lines));
        }
        None => println!("No timestamps returned by the recognizer."),
    }

    println!(
        "\nTranslation ({}):\n  {}",
        report.destination.label, report.translation
    );
    match (&report.audio_path, &report.synthesis_error) {
        (Some(path), _) => println!("Audio: {}", path.display()),
        (None, Some(e)) => println!("Audio not generated: {e}"),
        (None, None) => {}
    }
}

fn write_subtitles(report: &FileReport, input: &Path, dir: &Path) {
    let Some(ref lines) = report.subtitles else {
        return;
    };
    if let Err(e) = fs::create_dir_all(dir) {
        log::warn!("Could not create {}: {e}", dir.display());
        return;
    }
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("subtitles");
    let path = dir.join(format!("{stem}.srt"));
    match export_srt(&path, lines) {
        Ok(()) => println!("Subtitles: {}", path.display()),
        Err(e) => log::warn!("{e}"),
    }
}

fn build_use_case(
    cli: &Cli,
    config: &AzureConfig,
    transport: Arc<dyn HttpTransport>,
) -> ProcessFileUseCase {
    let translate = TranslateSpeechUseCase::new(
        Box::new(AzureTranslator::from_config(transport.clone(), config)),
        Box::new(AzureTranslator::from_config(transport.clone(), config)),
        Box::new(AzureSpeechSynthesizer::from_config(transport.clone(), config)),
        Box::new(FileAudioStore::new(&cli.output_dir)),
    );
    ProcessFileUseCase::new(
        Box::new(AzureSpeechRecognizer::from_config(transport.clone(), config)),
        Box::new(AzureTranslator::from_config(transport, config)),
        translate,
        &cli.language,
        Some(Box::new(StdoutPipelineLogger::new())),
    )
}

fn build_config(cli: &Cli) -> Result<AzureConfig, Box<dyn std::error::Error>> {
    let speech = AzureCredentials::new(
        required(&cli.speech_key, "speech key", "--speech-key", "SPEECH_KEY")?,
        required(&cli.speech_region, "speech region", "--speech-region", "SPEECH_REGION")?,
    );
    let translator = AzureCredentials::new(
        required(&cli.translator_key, "translator key", "--translator-key", "TRANSLATOR_KEY")?,
        required(
            &cli.translator_region,
            "translator region",
            "--translator-region",
            "TRANSLATOR_REGION",
        )?,
    );

    let mut config = AzureConfig::new(speech, translator);
    if let Some(ref endpoint) = cli.stt_endpoint {
        config = config.with_recognition_endpoint(endpoint.as_str());
    }
    if let Some(ref endpoint) = cli.tts_endpoint {
        config = config.with_synthesis_endpoint(endpoint.as_str());
    }
    if let Some(ref endpoint) = cli.translator_endpoint {
        config = config.with_translator_endpoint(endpoint.as_str());
    }
    Ok(config)
}

fn required<'a>(
    value: &'a Option<String>,
    what: &str,
    flag: &str,
    env: &str,
) -> Result<&'a str, String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| format!("Missing {what}: pass {flag} or set {env}"))
}

fn parse_destination(query: &str) -> Result<DestinationLanguage, String> {
    find_destination(query).ok_or_else(|| {
        format!("Unknown destination language '{query}' (see --list-languages)")
    })
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    for input in &cli.inputs {
        if !input.exists() {
            return Err(format!("Input file not found: {}", input.display()).into());
        }
        if !is_audio(input) {
            return Err(format!(
                "Input must be a .wav file, got: {}",
                input.display()
            )
            .into());
        }
    }
    parse_destination(&cli.to)?;
    if cli.language.trim().is_empty() {
        return Err("Recognition language must not be empty".into());
    }
    if cli.timeout == 0 {
        return Err("Timeout must be at least 1 second".into());
    }
    if cli.output_dir.is_file() {
        return Err(format!(
            "Output directory is a file: {}",
            cli.output_dir.display()
        )
        .into());
    }
    Ok(())
}

fn is_audio(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| AUDIO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
