/// One processed file as it appears in the session history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRecord {
    pub file_name: String,
    pub original_text: String,
    pub detected_language: Option<String>,
    pub destination_label: String,
    pub translation: String,
}
