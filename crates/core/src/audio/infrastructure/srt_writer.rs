//! SRT (SubRip) writer for recognised segments.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::audio::domain::transcript::SubtitleLine;
use crate::shared::export_error::ExportError;

fn seconds_to_srt_time(seconds: f64) -> String {
    let ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let hours = ms / 3_600_000;
    let mins = (ms % 3_600_000) / 60_000;
    let secs = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;
    format!("{:02}:{:02}:{:02},{:03}", hours, mins, secs, millis)
}

pub fn write_srt<W: Write>(mut out: W, lines: &[SubtitleLine]) -> std::io::Result<()> {
    for (i, line) in lines.iter().enumerate() {
        writeln!(out, "{}", i + 1)?;
        writeln!(
            out,
            "{} --> {}",
            seconds_to_srt_time(line.start),
            seconds_to_srt_time(line.end)
        )?;
        writeln!(out, "{}", line.text)?;
        writeln!(out)?;
    }
    out.flush()
}

pub fn export_srt(path: &Path, lines: &[SubtitleLine]) -> Result<(), ExportError> {
    let to_error = |e| ExportError::Write {
        path: path.to_path_buf(),
        source: e,
    };
    let file = File::create(path).map_err(to_error)?;
    write_srt(BufWriter::new(file), lines).map_err(to_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn line(start: f64, end: f64, text: &str) -> SubtitleLine {
        SubtitleLine {
            start,
            end,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_srt_time_format() {
        assert_eq!(seconds_to_srt_time(0.0), "00:00:00,000");
        assert_eq!(seconds_to_srt_time(1.5), "00:00:01,500");
        assert_eq!(seconds_to_srt_time(3725.25), "01:02:05,250");
    }

    #[test]
    fn test_write_srt_numbers_cues() {
        let mut out = Vec::new();
        write_srt(&mut out, &[line(0.5, 1.7, "hola"), line(1.7, 2.0, "mundo")]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "1\n00:00:00,500 --> 00:00:01,700\nhola\n\n2\n00:00:01,700 --> 00:00:02,000\nmundo\n\n"
        );
    }

    #[test]
    fn test_write_srt_empty() {
        let mut out = Vec::new();
        write_srt(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_export_srt_writes_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("clip.srt");
        export_srt(&path, &[line(0.0, 1.0, "uno")]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("uno"));
    }

    #[test]
    fn test_export_srt_bad_directory() {
        let result = export_srt(Path::new("/nonexistent/dir/clip.srt"), &[]);
        assert!(matches!(result, Err(ExportError::Write { .. })));
    }
}
