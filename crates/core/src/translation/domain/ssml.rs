use super::voice::Voice;

/// Speech Synthesis Markup for one utterance in a single voice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SsmlDocument {
    text: String,
    voice: Voice,
    markup: String,
}

impl SsmlDocument {
    pub fn new(text: &str, voice: Voice) -> Self {
        let markup = format!(
            "<speak version='1.0' xmlns='http://www.w3.org/2001/10/synthesis' xml:lang='{}'>\
             <voice name='{}'>{}</voice></speak>",
            voice.locale,
            voice.name,
            escape_xml(text)
        );
        Self {
            text: text.to_string(),
            voice,
            markup,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn voice(&self) -> Voice {
        self.voice
    }

    pub fn as_str(&self) -> &str {
        &self.markup
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
