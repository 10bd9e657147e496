use super::constants::DEFAULT_DESTINATION_CODE;

/// A language the translation step can target, with its display label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DestinationLanguage {
    pub label: &'static str,
    pub code: &'static str,
}

pub const DESTINATION_LANGUAGES: &[DestinationLanguage] = &[
    DestinationLanguage { label: "Inglés", code: "en" },
    DestinationLanguage { label: "Español", code: "es" },
    DestinationLanguage { label: "Francés", code: "fr" },
    DestinationLanguage { label: "Alemán", code: "de" },
    DestinationLanguage { label: "Italiano", code: "it" },
    DestinationLanguage { label: "Portugués", code: "pt" },
    DestinationLanguage { label: "Japonés", code: "ja" },
    DestinationLanguage { label: "Chino", code: "zh-Hans" },
    DestinationLanguage { label: "Árabe", code: "ar" },
];

/// Look up a destination by code or label, ignoring case.
pub fn find_destination(query: &str) -> Option<DestinationLanguage> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    let lower = query.to_lowercase();
    DESTINATION_LANGUAGES
        .iter()
        .find(|lang| lang.code.eq_ignore_ascii_case(query) || lang.label.to_lowercase() == lower)
        .copied()
}

pub fn default_destination() -> DestinationLanguage {
    DESTINATION_LANGUAGES
        .iter()
        .find(|lang| lang.code == DEFAULT_DESTINATION_CODE)
        .copied()
        .unwrap_or(DESTINATION_LANGUAGES[0])
}
