use once_cell::sync::Lazy;
use regex::Regex;

// @module: Sentence segmentation, validation and tokenization

// @const: Anything that is not a Hebrew letter
static NON_HEBREW_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\u{0590}-\u{05FF}]").unwrap());

// @const: Any Latin letter
static LATIN_LETTER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]").unwrap());

// @const: Redaction/ellipsis marker: two or more dashes with optional spaces
static DASH_SEQUENCE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(-\s*){2,}").unwrap());

// @const: Dash-like Unicode variants normalized to a plain hyphen
static DASH_VARIANTS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[‐‑‒–—―−]").unwrap());

// @const: Words (with an optional inner quote), digit runs, and single
// punctuation/symbol characters from the allowed set
static TOKENIZE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\w+["']?\w*|\d+|[".,;:!?()\[\]{}\-%&@#$*+=/<>~`|\\]"#).unwrap()
});

// @const: Maximal runs of digits or non-digits inside a mixed token
static MIXED_RUNS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+|\D+").unwrap());

/// Replace all dash-like Unicode variants with a standard hyphen
pub fn normalize_dashes(text: &str) -> String {
    DASH_VARIANTS_REGEX.replace_all(text, "-").into_owned()
}

/// Segments the text into sentences at boundaries where a sentence-terminal
/// punctuation mark is followed by whitespace and then a non-whitespace
/// character. Segments are trimmed; empty segments are dropped.
pub fn segment_sentences(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;

    let mut i = 0;
    while i < chars.len() {
        let (byte_idx, c) = chars[i];
        if matches!(c, '.' | '!' | '?') {
            // Scan past the whitespace run after the terminal mark
            let mut j = i + 1;
            while j < chars.len() && chars[j].1.is_whitespace() {
                j += 1;
            }
            // Split only when whitespace is followed by more content
            if j > i + 1 && j < chars.len() {
                let boundary = byte_idx + c.len_utf8();
                sentences.push(&text[start..boundary]);
                start = chars[j].0;
                i = j;
                continue;
            }
        }
        i += 1;
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Checks if a sentence is scriptally valid: it must contain Hebrew letters,
/// no Latin letters, and no redaction marker.
pub fn is_valid_sentence(sentence: &str) -> bool {
    let hebrew_only = NON_HEBREW_REGEX.replace_all(sentence, "");
    if hebrew_only.is_empty() {
        return false;
    }
    if LATIN_LETTER_REGEX.is_match(sentence) {
        return false;
    }
    if DASH_SEQUENCE_REGEX.is_match(sentence) {
        return false;
    }
    true
}

/// Tokenizes a sentence into words, numerals and punctuation marks.
///
/// A token ending in a double quote is split into the word and a standalone
/// quote token; a token mixing digits and letters is split into maximal
/// digit and non-digit runs, preserving order.
pub fn tokenize_sentence(sentence: &str) -> Vec<String> {
    let mut processed_tokens = Vec::new();

    for m in TOKENIZE_REGEX.find_iter(sentence) {
        let token = m.as_str();
        if token.ends_with('"') && token.chars().count() > 1 {
            // Split the word and the ending quote
            processed_tokens.push(token[..token.len() - 1].to_string());
            processed_tokens.push("\"".to_string());
        } else {
            processed_tokens.extend(split_mixed_token(token));
        }
    }

    processed_tokens
}

fn split_mixed_token(token: &str) -> Vec<String> {
    let has_digit = token.chars().any(|c| c.is_ascii_digit());
    let has_alpha = token.chars().any(|c| c.is_alphabetic());
    if has_digit && has_alpha {
        MIXED_RUNS_REGEX
            .find_iter(token)
            .map(|m| m.as_str().to_string())
            .collect()
    } else {
        vec![token.to_string()]
    }
}
