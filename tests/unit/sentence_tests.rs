/*!
 * Tests for sentence segmentation, validation and tokenization
 */

use knesset_extract::sentence::{
    is_valid_sentence, normalize_dashes, segment_sentences, tokenize_sentence,
};

/// Test splitting at terminal punctuation followed by more content
#[test]
fn test_segment_withThreeSentences_shouldSplitAtBoundaries() {
    let segments = segment_sentences("זו שורה ראשונה. זו שורה שנייה! וזו שלישית?");
    assert_eq!(
        segments,
        vec!["זו שורה ראשונה.", "זו שורה שנייה!", "וזו שלישית?"]
    );
}

/// Test a trailing terminal mark does not open an empty segment
#[test]
fn test_segment_withSingleSentence_shouldNotSplit() {
    let segments = segment_sentences("משפט אחד בלבד.");
    assert_eq!(segments, vec!["משפט אחד בלבד."]);
}

/// Test punctuation not followed by whitespace does not split
#[test]
fn test_segment_withAbbreviationDot_shouldNotSplit() {
    let segments = segment_sentences("מספר 3.5 אחוזים");
    assert_eq!(segments, vec!["מספר 3.5 אחוזים"]);
}

/// Test a sentence with Hebrew content passes validation
#[test]
fn test_validator_withHebrewSentence_shouldAccept() {
    assert!(is_valid_sentence("זהו משפט תקין לחלוטין."));
}

/// Test a sentence containing Latin letters is rejected
#[test]
fn test_validator_withLatinLetters_shouldReject() {
    assert!(!is_valid_sentence("זה משפט עם English בתוכו."));
}

/// Test a sentence without any Hebrew letters is rejected
#[test]
fn test_validator_withNoHebrewContent_shouldReject() {
    assert!(!is_valid_sentence("123 456 789."));
}

/// Test the redaction marker (dash run) is rejected
#[test]
fn test_validator_withDashSequence_shouldReject() {
    assert!(!is_valid_sentence("הוא אמר - - ולא סיים."));
    assert!(!is_valid_sentence("הוא אמר -- ולא סיים."));
}

/// Test dash-like Unicode variants normalize to a plain hyphen
#[test]
fn test_normalize_dashes_withUnicodeVariants_shouldUseHyphen() {
    assert_eq!(normalize_dashes("א–ב—ג−ד"), "א-ב-ג-ד");
}

/// Test words and punctuation come out as separate tokens
#[test]
fn test_tokenize_withPunctuation_shouldSeparateTokens() {
    let tokens = tokenize_sentence("שלום, מה שלומך?");
    assert_eq!(tokens, vec!["שלום", ",", "מה", "שלומך", "?"]);
}

/// Test a trailing double quote is split off its word
#[test]
fn test_tokenize_withClosingQuote_shouldSplitQuote() {
    let tokens = tokenize_sentence("אמר \"שלום\" לכולם");
    assert_eq!(tokens, vec!["אמר", "\"", "שלום", "\"", "לכולם"]);
}

/// Test an inner quote (acronym) stays inside its token
#[test]
fn test_tokenize_withAcronymQuote_shouldKeepToken() {
    let tokens = tokenize_sentence("חיילי צה\"ל הגיעו");
    assert_eq!(tokens, vec!["חיילי", "צה\"ל", "הגיעו"]);
}

/// Test a token mixing digits and letters is split into runs
#[test]
fn test_tokenize_withMixedToken_shouldSplitDigitRuns() {
    let tokens = tokenize_sentence("סעיף מס3 אושר");
    assert_eq!(tokens, vec!["סעיף", "מס", "3", "אושר"]);
}

/// Test standalone digit runs stay single tokens
#[test]
fn test_tokenize_withNumber_shouldKeepDigitRun() {
    let tokens = tokenize_sentence("בשנת 1996 הוקמה הוועדה");
    assert_eq!(tokens, vec!["בשנת", "1996", "הוקמה", "הוועדה"]);
}
