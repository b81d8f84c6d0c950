use std::collections::HashMap;
use once_cell::sync::Lazy;

// @module: Hebrew number-word to integer conversion

/// The hundreds marker word, converted multiplicatively instead of additively
const HUNDREDS_MARKER: &str = "מאות";

// @const: Number-word lookup table (units, ordinals, tens, scale words)
static HEBREW_NUMBERS: Lazy<HashMap<&'static str, i64>> = Lazy::new(|| {
    HashMap::from([
        ("אחד", 1),
        ("אחת", 1),
        ("ראשון", 1),
        ("שניים", 2),
        ("שני", 2),
        ("שתיים", 2),
        ("שתי", 2),
        ("שניה", 2),
        ("שלושה", 3),
        ("שלוש", 3),
        ("שלישי", 3),
        ("ארבעה", 4),
        ("ארבע", 4),
        ("רביעי", 4),
        ("חמישה", 5),
        ("חמש", 5),
        ("חמישי", 5),
        ("שישה", 6),
        ("שש", 6),
        ("שישי", 6),
        ("שבעה", 7),
        ("שבע", 7),
        ("שביעי", 7),
        ("שמונה", 8),
        ("שמיני", 8),
        ("תשעה", 9),
        ("תשע", 9),
        ("תשיעי", 9),
        ("עשרה", 10),
        ("עשר", 10),
        ("עשירי", 10),
        ("עשרים", 20),
        ("שלושים", 30),
        ("ארבעים", 40),
        ("חמישים", 50),
        ("שישים", 60),
        ("שבעים", 70),
        ("שמונים", 80),
        ("תשעים", 90),
        (HUNDREDS_MARKER, 100),
        ("מאה", 100),
        ("מאתיים", 200),
        ("אלף", 1000),
    ])
});

/// Returns true if the word appears in the number-word table
pub fn is_number_word(word: &str) -> bool {
    HEBREW_NUMBERS.contains_key(word)
}

/// Converts a sequence of Hebrew number words into an integer.
///
/// Accumulation is strict left-to-right: each recognized word adds its value,
/// and the hundreds marker retroactively multiplies the most recently added
/// value by 100 instead of adding its own. Processing stops at the first word
/// not present in the table. Returns None when the total ends at zero.
///
/// Known approximation kept for output compatibility: the hundreds rewrite
/// only corrects the immediately preceding value, so a phrase where the
/// marker is not directly preceded by its unit misconverts.
pub fn hebrew_words_to_int<S: AsRef<str>>(words: &[S]) -> Option<i64> {
    let mut total: i64 = 0;
    let mut cur_num: i64 = 0;

    for word in words {
        let word = word.as_ref();
        match HEBREW_NUMBERS.get(word) {
            Some(&value) => {
                if word == HUNDREDS_MARKER {
                    total -= cur_num;
                    total += cur_num * 100;
                } else {
                    cur_num = value;
                    total += value;
                }
            }
            // Not a number word, stop processing
            None => break,
        }
    }

    if total > 0 {
        Some(total)
    } else {
        None
    }
}
