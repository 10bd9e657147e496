use super::history_record::HistoryRecord;

/// Append-only, in-memory record of the files processed in one session.
///
/// Owned by the caller and passed to the pipeline explicitly; records are
/// never modified once appended.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionHistory {
    records: Vec<HistoryRecord>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: HistoryRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(file: &str) -> HistoryRecord {
        HistoryRecord {
            file_name: file.to_string(),
            original_text: "hola".to_string(),
            detected_language: Some("es".to_string()),
            destination_label: "Inglés".to_string(),
            translation: "hello".to_string(),
        }
    }

    #[test]
    fn test_new_is_empty() {
        let history = SessionHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn test_push_preserves_order() {
        let mut history = SessionHistory::new();
        history.push(record("a.wav"));
        history.push(record("b.wav"));
        history.push(record("c.wav"));
        let names: Vec<_> = history.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.wav", "b.wav", "c.wav"]);
        assert_eq!(history.records()[1], record("b.wav"));
    }

    #[test]
    fn test_clear() {
        let mut history = SessionHistory::new();
        history.push(record("a.wav"));
        history.clear();
        assert!(history.is_empty());
    }
}
