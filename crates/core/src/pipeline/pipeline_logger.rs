use std::collections::HashMap;
use std::time::Instant;

use crate::shared::service_error::Stage;

/// Cross-cutting logger for pipeline orchestration events.
///
/// Decouples use cases from specific output mechanisms so each caller can
/// observe the remote calls without changing the orchestration code.
pub trait PipelineLogger: Send {
    /// Report file-level progress within a session.
    fn progress(&mut self, current: usize, total: usize);

    /// Record how long one remote stage took.
    fn timing(&mut self, stage: Stage, duration_ms: f64);

    /// Record that a stage failed.
    fn failure(&mut self, stage: Stage);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-session summary. Default: no-op.
    fn summary(&self) {}
}

/// Run `f` and record its wall-clock time under `stage`.
pub fn timed<T>(logger: &mut dyn PipelineLogger, stage: Stage, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let result = f();
    logger.timing(stage, start.elapsed().as_secs_f64() * 1000.0);
    result
}

/// Silent logger that discards all events.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn progress(&mut self, _current: usize, _total: usize) {}
    fn timing(&mut self, _stage: Stage, _duration_ms: f64) {}
    fn failure(&mut self, _stage: Stage) {}
    fn info(&mut self, _message: &str) {}
}

/// CLI-oriented logger that tracks per-stage latency and failures and
/// reports a summary at the end of the session.
pub struct StdoutPipelineLogger {
    timings: HashMap<Stage, Vec<f64>>,
    failures: HashMap<Stage, usize>,
    start_time: Instant,
    total_files: usize,
    messages: Vec<String>,
}

impl StdoutPipelineLogger {
    pub fn new() -> Self {
        Self {
            timings: HashMap::new(),
            failures: HashMap::new(),
            start_time: Instant::now(),
            total_files: 0,
            messages: Vec::new(),
        }
    }

    /// Returns the formatted summary string, or `None` if no call was recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() && self.failures.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let mut lines = vec![format!(
            "Session summary ({} files, {:.1}s total):",
            self.total_files,
            elapsed_ms / 1000.0
        )];

        let mut stages: Vec<_> = self.timings.keys().collect();
        stages.sort();
        for stage in stages {
            let durations = &self.timings[stage];
            let total_ms: f64 = durations.iter().sum();
            let avg_ms = if durations.is_empty() {
                0.0
            } else {
                total_ms / durations.len() as f64
            };
            let calls = durations.len();
            lines.push(format!(
                "  {:12}: {calls} calls  avg {avg_ms:7.1}ms  total {total_ms:8.0}ms",
                stage.as_str()
            ));
        }

        let mut failed: Vec<_> = self.failures.iter().collect();
        failed.sort();
        for (stage, count) in failed {
            lines.push(format!("  {} failures: {count}", stage.as_str()));
        }

        Some(lines.join("\n"))
    }

    pub fn timings_for(&self, stage: Stage) -> Option<&[f64]> {
        self.timings.get(&stage).map(|v| v.as_slice())
    }

    pub fn failures_for(&self, stage: Stage) -> usize {
        self.failures.get(&stage).copied().unwrap_or(0)
    }
}

impl Default for StdoutPipelineLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineLogger for StdoutPipelineLogger {
    fn progress(&mut self, current: usize, total: usize) {
        self.total_files = total;
        log::info!("Processing file {current}/{total}");
    }

    fn timing(&mut self, stage: Stage, duration_ms: f64) {
        self.timings.entry(stage).or_default().push(duration_ms);
    }

    fn failure(&mut self, stage: Stage) {
        *self.failures.entry(stage).or_default() += 1;
    }

    fn info(&mut self, message: &str) {
        self.messages.push(message.to_string());
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_logger_all_methods_are_noop() {
        let mut logger = NullPipelineLogger;
        logger.progress(1, 10);
        logger.timing(Stage::Recognition, 5.0);
        logger.failure(Stage::Synthesis);
        logger.info("hello");
        logger.summary();
    }

    #[test]
    fn test_timing_records_values() {
        let mut logger = StdoutPipelineLogger::new();
        logger.timing(Stage::Recognition, 20.0);
        logger.timing(Stage::Recognition, 30.0);
        logger.timing(Stage::Translation, 5.0);

        let recognition = logger.timings_for(Stage::Recognition).unwrap();
        assert_eq!(recognition, &[20.0, 30.0]);
        assert_eq!(logger.timings_for(Stage::Translation).unwrap().len(), 1);
        assert!(logger.timings_for(Stage::Synthesis).is_none());
    }

    #[test]
    fn test_timed_records_and_returns_result() {
        let mut logger = StdoutPipelineLogger::new();
        let value = timed(&mut logger, Stage::Detection, || 42);
        assert_eq!(value, 42);
        let recorded = logger.timings_for(Stage::Detection).unwrap();
        assert_eq!(recorded.len(), 1);
        assert!(recorded[0] >= 0.0);
    }

    #[test]
    fn test_failures_are_counted() {
        let mut logger = StdoutPipelineLogger::new();
        logger.failure(Stage::Synthesis);
        logger.failure(Stage::Synthesis);
        assert_eq!(logger.failures_for(Stage::Synthesis), 2);
        assert_eq!(logger.failures_for(Stage::Recognition), 0);
    }

    #[test]
    fn test_summary_includes_stages_and_failures() {
        let mut logger = StdoutPipelineLogger::new();
        logger.progress(1, 2);
        logger.timing(Stage::Recognition, 120.0);
        logger.timing(Stage::Synthesis, 300.0);
        logger.failure(Stage::Translation);

        let summary = logger.summary_string().unwrap();
        assert!(summary.contains("Session summary (2 files"));
        assert!(summary.contains("recognition"));
        assert!(summary.contains("synthesis"));
        assert!(summary.contains("translation failures: 1"));
    }

    #[test]
    fn test_empty_summary_returns_none() {
        assert!(StdoutPipelineLogger::new().summary_string().is_none());
    }

    #[test]
    fn test_info_stores_messages() {
        let mut logger = StdoutPipelineLogger::default();
        logger.info("hello world");
        assert_eq!(logger.messages, vec!["hello world".to_string()]);
    }
}
