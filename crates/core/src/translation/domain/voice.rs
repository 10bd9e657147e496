/// Neural voice and the matching `xml:lang` locale for SSML.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Voice {
    pub name: &'static str,
    pub locale: &'static str,
}

pub const DEFAULT_VOICE: Voice = Voice {
    name: "en-US-AriaNeural",
    locale: "en-US",
};

/// Destination code → voice. Codes not listed fall back to [`DEFAULT_VOICE`].
const VOICES: &[(&str, Voice)] = &[
    ("en", DEFAULT_VOICE),
    (
        "es",
        Voice {
            name: "es-ES-ElviraNeural",
            locale: "es-ES",
        },
    ),
    (
        "fr",
        Voice {
            name: "fr-FR-DeniseNeural",
            locale: "fr-FR",
        },
    ),
    (
        "de",
        Voice {
            name: "de-DE-KatjaNeural",
            locale: "de-DE",
        },
    ),
    (
        "it",
        Voice {
            name: "it-IT-ElsaNeural",
            locale: "it-IT",
        },
    ),
    (
        "pt",
        Voice {
            name: "pt-BR-FranciscaNeural",
            locale: "pt-BR",
        },
    ),
];

/// Exact-match lookup of the voice for a destination code.
pub fn mapped_voice(code: &str) -> Option<Voice> {
    VOICES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, voice)| *voice)
}

pub fn voice_for(code: &str) -> Voice {
    mapped_voice(code).unwrap_or(DEFAULT_VOICE)
}
