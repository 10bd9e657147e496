//! CSV export of the session history.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::history::domain::history_record::HistoryRecord;
use crate::shared::export_error::ExportError;

pub const CSV_HEADERS: [&str; 5] = [
    "Archivo",
    "Texto original",
    "Idioma detectado",
    "Idioma destino",
    "Traducción",
];

/// Quote a field only when it contains a delimiter, quote or line break.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_row<W: Write>(out: &mut W, fields: &[&str]) -> std::io::Result<()> {
    let line: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
    writeln!(out, "{}", line.join(","))
}

pub fn write_csv<W: Write>(mut out: W, records: &[HistoryRecord]) -> std::io::Result<()> {
    write_row(&mut out, &CSV_HEADERS)?;
    for record in records {
        write_row(
            &mut out,
            &[
                record.file_name.as_str(),
                record.original_text.as_str(),
                record.detected_language.as_deref().unwrap_or(""),
                record.destination_label.as_str(),
                record.translation.as_str(),
            ],
        )?;
    }
    out.flush()
}

pub fn to_csv_string(records: &[HistoryRecord]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_csv(&mut buf, records);
    String::from_utf8_lossy(&buf).into_owned()
}

pub fn export_csv(path: &Path, records: &[HistoryRecord]) -> Result<(), ExportError> {
    let to_error = |e| ExportError::Write {
        path: path.to_path_buf(),
        source: e,
    };
    let file = File::create(path).map_err(to_error)?;
    write_csv(BufWriter::new(file), records).map_err(to_error)?;
    log::info!("History ({} rows) written to {}", records.len(), path.display());
    Ok(())
}
