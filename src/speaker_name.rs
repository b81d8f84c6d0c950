use once_cell::sync::Lazy;
use regex::Regex;

use crate::app_config::NameRules;

// @module: Speaker name normalization

// @const: Parenthesized content inside a name span
static PARENTHESES_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(.*?\)").unwrap());

/// The conjunction + definite-article prefix that always ends a name
const CONJUNCTION_PREFIX: &str = "וה";

/// Extracts the speaker's name from the matched announcement span:
/// parentheticals are removed, then the span is cleaned word by word.
pub fn extract_speaker_name(span: &str, rules: &NameRules) -> String {
    let text = PARENTHESES_REGEX.replace_all(span.trim(), "");
    clean_speaker_name(text.trim(), rules)
}

/// Cleans a speaker name by walking its words from the end backwards.
///
/// Trailing titles and ministry/portfolio fragments are skipped until the
/// first real name word; after that, accumulation halts at a stop-word, a
/// title, a word starting with the conjunction prefix, or — once at least
/// two words are accumulated — a definite-article word that is not a known
/// given name. A hard word cap also halts it. The surviving words are
/// restored to original order and trailing colon/hyphen characters trimmed.
pub fn clean_speaker_name(text: &str, rules: &NameRules) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();

    let mut name_words: Vec<&str> = Vec::new();
    for word in words.iter().rev() {
        if is_stop_word(word, rules) || rules.title_prefixes.contains(*word) {
            if name_words.is_empty() {
                // Trailing noise after the name; keep walking towards it
                continue;
            }
            // The name has ended
            break;
        }
        if word.starts_with(CONJUNCTION_PREFIX) {
            break;
        }
        if name_words.len() >= 2
            && word.starts_with('ה')
            && !rules.given_name_exceptions.contains(*word)
        {
            break;
        }

        name_words.push(word);
        if name_words.len() >= rules.max_name_words {
            break;
        }
    }

    // Reverse the accumulated words to restore the original order
    name_words.reverse();
    let name = name_words.join(" ");
    let name = name.trim_end_matches(':');
    name.trim_matches('-').to_string()
}

/// Stop-word lookup; a ministry fragment may carry the definite article,
/// so the word is also tried with a leading `ה` removed.
fn is_stop_word(word: &str, rules: &NameRules) -> bool {
    if rules.stop_words.contains(word) {
        return true;
    }
    if let Some(stripped) = word.strip_prefix('ה') {
        if rules.stop_words.contains(stripped) {
            return true;
        }
    }
    false
}
