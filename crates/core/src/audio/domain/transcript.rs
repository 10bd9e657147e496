use serde_json::Value;

use crate::shared::constants::TICKS_PER_SECOND;

/// Recognised text together with the decoded service response.
#[derive(Clone, Debug, PartialEq)]
pub struct Transcription {
    pub text: String,
    pub raw: Value,
}

impl Transcription {
    /// Build from a recognition response; a missing `DisplayText` yields "".
    pub fn from_response(raw: Value) -> Self {
        let text = raw
            .get("DisplayText")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();
        Self { text, raw }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Timed segments, or `None` when the response carries no segment list.
    pub fn segments(&self) -> Option<Vec<Segment>> {
        let list = self.raw.get("segments")?.as_array()?;
        Some(list.iter().map(Segment::from_value).collect())
    }

    pub fn subtitle_lines(&self) -> Option<Vec<SubtitleLine>> {
        self.segments()
            .map(|segments| segments.iter().map(SubtitleLine::from_segment).collect())
    }
}

/// A recognised span, timed in 100 ns ticks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub offset: u64,
    pub duration: u64,
    pub text: String,
}

impl Segment {
    fn from_value(value: &Value) -> Self {
        Self {
            offset: ticks(value, "offset"),
            duration: ticks(value, "duration"),
            text: value
                .get("text")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
        }
    }
}

fn ticks(value: &Value, key: &str) -> u64 {
    value
        .get(key)
        .and_then(|v| v.as_u64().or_else(|| v.as_f64().map(|f| f.max(0.0) as u64)))
        .unwrap_or(0)
}

/// A segment converted to seconds, rounded to centiseconds for display.
#[derive(Clone, Debug, PartialEq)]
pub struct SubtitleLine {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl SubtitleLine {
    pub fn from_segment(segment: &Segment) -> Self {
        let start = segment.offset as f64 / TICKS_PER_SECOND;
        let end = start + segment.duration as f64 / TICKS_PER_SECOND;
        Self {
            start: round_centis(start),
            end: round_centis(end),
            text: segment.text.clone(),
        }
    }
}

fn round_centis(seconds: f64) -> f64 {
    (seconds * 100.0).round() / 100.0
}
