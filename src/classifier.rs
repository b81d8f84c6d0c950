use once_cell::sync::Lazy;
use regex::Regex;

use crate::document_model::{DocParagraph, StyleSheet};
use crate::formatting;

// @module: Speaker-line classification of paragraphs

// @const: Speaker announcement line, with optional angle brackets and parentheses
static SPEAKER_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(<+)?(.+?)(\s*\(.*?\))?:(>+)?$").unwrap()
});

// @const: '<<...>>' redaction wrapper
static ANGLE_BRACKETS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<<.*?>>").unwrap());

/// Result of classifying one paragraph.
///
/// `speaker_span` is Some only when the cleaned text matches the speaker-line
/// pattern AND the paragraph is underlined; everything else is speech content.
#[derive(Debug, Clone)]
pub struct ClassifiedParagraph {
    /// The raw name span of a speaker announcement
    pub speaker_span: Option<String>,

    /// Cleaned paragraph text (wrapper stripped, quotes normalized)
    pub text: String,
}

impl ClassifiedParagraph {
    pub fn is_speaker_line(&self) -> bool {
        self.speaker_span.is_some()
    }
}

/// Classify a paragraph as a speaker announcement or speech content.
///
/// A text match without underlining, or underlining without a text match,
/// is speech content, not an announcement.
pub fn classify_paragraph(paragraph: &DocParagraph, styles: &StyleSheet) -> ClassifiedParagraph {
    let text = clean_paragraph_text(&paragraph.text);

    let speaker_span = match SPEAKER_LINE_REGEX.captures(&text) {
        Some(caps) if formatting::is_paragraph_underlined(paragraph, styles) => {
            caps.get(2).map(|m| m.as_str().trim().to_string())
        }
        _ => None,
    };

    ClassifiedParagraph { speaker_span, text }
}

/// Strip the '<<...>>' wrapper and normalize curly/exotic quote variants to
/// straight double and single quotes.
pub fn clean_paragraph_text(text: &str) -> String {
    let text = text.trim();
    let text = ANGLE_BRACKETS_REGEX.replace_all(text, "");
    let text = text.trim();

    let mut cleaned = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '”' | '“' | '״' => cleaned.push('"'),
            '’' | '‘' | '`' | '´' | 'ʼ' | '‛' | '׳' => cleaned.push('\''),
            _ => cleaned.push(c),
        }
    }
    cleaned
}
