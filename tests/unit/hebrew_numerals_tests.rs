/*!
 * Tests for Hebrew number-word conversion
 */

use knesset_extract::hebrew_numerals::{hebrew_words_to_int, is_number_word};

/// Test the hundreds marker applied to its preceding unit
#[test]
fn test_words_to_int_withHundredsPhrase_shouldResolveMultiplicatively() {
    // "three hundred forty"
    assert_eq!(
        hebrew_words_to_int(&["שלוש", "מאות", "ארבעים"]),
        Some(340)
    );
}

/// Test simple additive phrases
#[test]
fn test_words_to_int_withAdditivePhrase_shouldSumValues() {
    // "twenty five"
    assert_eq!(hebrew_words_to_int(&["עשרים", "חמישה"]), Some(25));
    // "fifteen" written as "five ten"
    assert_eq!(hebrew_words_to_int(&["חמישה", "עשר"]), Some(15));
}

/// Test the dedicated scale words
#[test]
fn test_words_to_int_withScaleWords_shouldUseTableValues() {
    assert_eq!(hebrew_words_to_int(&["מאה"]), Some(100));
    assert_eq!(hebrew_words_to_int(&["מאתיים"]), Some(200));
    assert_eq!(hebrew_words_to_int(&["אלף"]), Some(1000));
}

/// Test empty input resolves to nothing
#[test]
fn test_words_to_int_withEmptyInput_shouldReturnNone() {
    let words: Vec<&str> = Vec::new();
    assert_eq!(hebrew_words_to_int(&words), None);
}

/// Test all-unrecognized input resolves to nothing
#[test]
fn test_words_to_int_withUnrecognizedWords_shouldReturnNone() {
    assert_eq!(hebrew_words_to_int(&["שולחן", "כיסא"]), None);
}

/// Test accumulation stops at the first unknown token
#[test]
fn test_words_to_int_withTrailingUnknownWord_shouldStopAccumulation() {
    assert_eq!(hebrew_words_to_int(&["עשרים", "כנסת", "חמישה"]), Some(20));
}

/// Test a malformed leading word yields no number
#[test]
fn test_words_to_int_withUnknownLeadingWord_shouldReturnNone() {
    assert_eq!(hebrew_words_to_int(&["כנסת", "עשרים"]), None);
}

/// Test the number-word table membership check
#[test]
fn test_is_number_word_withTableAndNonTableWords_shouldMatchTable() {
    assert!(is_number_word("שלוש"));
    assert!(is_number_word("מאות"));
    assert!(!is_number_word("ישיבה"));
}
