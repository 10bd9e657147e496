//! Plain-text rendering of reports and tables for the terminal.

use voxbridge_core::audio::domain::transcript::SubtitleLine;
use voxbridge_core::history::domain::history_record::HistoryRecord;
use voxbridge_core::history::infrastructure::csv_writer::CSV_HEADERS;
use voxbridge_core::shared::languages::DESTINATION_LANGUAGES;

const MAX_CELL_CHARS: usize = 40;

fn truncate(text: &str, max: usize) -> String {
    let single_line = text.replace(['\n', '\r'], " ");
    if single_line.chars().count() <= max {
        single_line
    } else {
        let cut: String = single_line.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

/// Render rows as a left-aligned table with a header separator.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render_row = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}", width = *width))
            .collect();
        padded.join(" | ").trim_end().to_string()
    };

    let mut out = String::new();
    out.push_str(&render_row(headers.to_vec()));
    out.push('\n');
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&separator.join("-+-"));
    out.push('\n');
    for row in rows {
        out.push_str(&render_row(row.iter().map(String::as_str).collect()));
        out.push('\n');
    }
    out
}

pub fn format_subtitle_table(lines: &[SubtitleLine]) -> String {
    let rows: Vec<Vec<String>> = lines
        .iter()
        .map(|line| {
            vec![
                format!("{:.2}", line.start),
                format!("{:.2}", line.end),
                line.text.clone(),
            ]
        })
        .collect();
    render_table(&["Inicio (s)", "Fin (s)", "Texto"], &rows)
}

pub fn format_history_table(records: &[HistoryRecord]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.file_name.clone(),
                truncate(&r.original_text, MAX_CELL_CHARS),
                r.detected_language.clone().unwrap_or_default(),
                r.destination_label.clone(),
                truncate(&r.translation, MAX_CELL_CHARS),
            ]
        })
        .collect();
    render_table(&CSV_HEADERS, &rows)
}

pub fn format_languages() -> String {
    let rows: Vec<Vec<String>> = DESTINATION_LANGUAGES
        .iter()
        .map(|lang| vec![lang.code.to_string(), lang.label.to_string()])
        .collect();
    render_table(&["Code", "Language"], &rows)
}
