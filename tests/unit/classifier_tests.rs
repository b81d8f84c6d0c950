/*!
 * Tests for speaker-line classification
 */

use knesset_extract::classifier::{classify_paragraph, clean_paragraph_text};
use knesset_extract::document_model::{DocParagraph, StyleDef, StyleSheet, TextRun};

use crate::common;

/// Test an underlined speaker-pattern paragraph becomes an announcement
#[test]
fn test_classify_withUnderlinedSpeakerLine_shouldAnnounce() {
    let doc = common::document(vec![common::underlined_paragraph("דני כהן:")]);
    let classified = classify_paragraph(&doc.paragraphs[0], &doc.styles);

    assert!(classified.is_speaker_line());
    assert_eq!(classified.speaker_span.as_deref(), Some("דני כהן"));
}

/// Test formatting precedence: a text match without underline is speech
#[test]
fn test_classify_withPlainSpeakerLine_shouldBeSpeech() {
    let doc = common::document(vec![common::plain_paragraph("דני כהן:")]);
    let classified = classify_paragraph(&doc.paragraphs[0], &doc.styles);

    assert!(!classified.is_speaker_line());
    assert_eq!(classified.text, "דני כהן:");
}

/// Test an underlined paragraph without the text pattern is speech
#[test]
fn test_classify_withUnderlinedPlainText_shouldBeSpeech() {
    let doc = common::document(vec![common::underlined_paragraph("זהו משפט רגיל בלי נקודתיים")]);
    let classified = classify_paragraph(&doc.paragraphs[0], &doc.styles);

    assert!(!classified.is_speaker_line());
}

/// Test the parenthetical after the name stays out of the captured span
#[test]
fn test_classify_withParenthetical_shouldCaptureNameOnly() {
    let doc = common::document(vec![common::underlined_paragraph("דני כהן (יושב ראש):")]);
    let classified = classify_paragraph(&doc.paragraphs[0], &doc.styles);

    assert_eq!(classified.speaker_span.as_deref(), Some("דני כהן"));
}

/// Test angle-bracket open/close markers around the announcement
#[test]
fn test_classify_withAngleMarkers_shouldAnnounce() {
    let doc = common::document(vec![common::underlined_paragraph("<דני כהן:>")]);
    let classified = classify_paragraph(&doc.paragraphs[0], &doc.styles);

    assert_eq!(classified.speaker_span.as_deref(), Some("דני כהן"));
}

/// Test underline inherited through the paragraph style chain
#[test]
fn test_classify_withStyleChainUnderline_shouldAnnounce() {
    let mut styles = StyleSheet::new();
    styles.insert(
        "Speaker",
        StyleDef {
            underline: None,
            based_on: Some("Base".to_string()),
        },
    );
    styles.insert(
        "Base",
        StyleDef {
            underline: Some(true),
            based_on: None,
        },
    );
    let paragraph =
        DocParagraph::from_runs(vec![TextRun::new("דני כהן:", None, None)], Some("Speaker"));

    let classified = classify_paragraph(&paragraph, &styles);
    assert!(classified.is_speaker_line());
}

/// Test curly and Hebrew quote variants normalize to straight quotes
#[test]
fn test_clean_paragraph_text_withQuoteVariants_shouldNormalize() {
    assert_eq!(clean_paragraph_text("היו״ר דני:"), "היו\"ר דני:");
    assert_eq!(clean_paragraph_text("אמר “שלום”"), "אמר \"שלום\"");
    assert_eq!(clean_paragraph_text("צה’ל"), "צה'ל");
}

/// Test the '<<...>>' wrapper is stripped before matching
#[test]
fn test_clean_paragraph_text_withRedactionWrapper_shouldStrip() {
    assert_eq!(clean_paragraph_text("<<הערת מערכת>> שלום לכולם"), "שלום לכולם");
}
