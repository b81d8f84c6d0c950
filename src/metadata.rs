use once_cell::sync::Lazy;
use regex::Regex;

use crate::document_model::DocParagraph;
use crate::hebrew_numerals;

// @module: Protocol-number extraction from document headings

// @const: 'פרוטוקול מס'/מספר <digits>' heading, optionally angle-bracketed
static PROTOCOL_HEADING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^<?פרוטוקול\s+(?:מס'?|מספר)\s*(\d+)>?").unwrap()
});

// @const: 'הישיבה <number words> של' heading
static SESSION_HEADING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^הישיבה\s+([א-ת\-]+)\s+של").unwrap()
});

// @const: Characters that are not digits, Hebrew letters, space or hyphen
static NON_NUMBER_CHARS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\d\u{0590}-\u{05FF}\s\-]").unwrap()
});

// @const: All-digit capture
static DIGITS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

// @const: Word separators inside a number-word capture
static WORD_SPLIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+|-").unwrap());

/// Extracts the protocol number from the document paragraphs.
///
/// Paragraphs are scanned in order; the first one whose start matches either
/// heading pattern decides the number. Returns -1 when no paragraph yields one.
pub fn extract_protocol_number(paragraphs: &[DocParagraph]) -> i64 {
    for par in paragraphs {
        if let Some(number) = protocol_number_from_text(&par.text) {
            return number;
        }
    }
    -1
}

/// Try both heading patterns against one paragraph text.
///
/// The captured span is cleaned of anything that is not a digit, a Hebrew
/// letter, a space or a hyphen, then parsed either as a literal integer or
/// word by word through the number table (with `ו`/`ה` prefixes stripped).
pub fn protocol_number_from_text(text: &str) -> Option<i64> {
    let text = text.trim();

    for pattern in [&*PROTOCOL_HEADING_REGEX, &*SESSION_HEADING_REGEX] {
        let Some(caps) = pattern.captures(text) else {
            continue;
        };
        let number_part = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
        if number_part.is_empty() {
            continue;
        }

        let cleaned = NON_NUMBER_CHARS_REGEX.replace_all(number_part, "");
        if DIGITS_REGEX.is_match(&cleaned) {
            if let Ok(value) = cleaned.parse::<i64>() {
                return Some(value);
            }
        } else {
            let mut number_words: Vec<&str> = Vec::new();
            for word in WORD_SPLIT_REGEX.split(&cleaned) {
                let word = word.trim();
                if word.is_empty() {
                    continue;
                }
                let base_word = if word.starts_with('ו') || word.starts_with('ה') {
                    word.trim_start_matches(['ו', 'ה'])
                } else {
                    word
                };
                if hebrew_numerals::is_number_word(base_word) {
                    number_words.push(base_word);
                } else {
                    // Stop processing if word not in mapping
                    break;
                }
            }
            if let Some(value) = hebrew_numerals::hebrew_words_to_int(&number_words) {
                return Some(value);
            }
        }
    }

    None
}
