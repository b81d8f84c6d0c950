/*!
 * Tests for .docx container parsing
 */

use knesset_extract::docx_reader::{load_document, parse_document_xml, parse_styles_xml};

use crate::common;

const DOCUMENT_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

fn wrap_body(body: &str) -> String {
    format!(
        "<w:document xmlns:w=\"{}\"><w:body>{}</w:body></w:document>",
        DOCUMENT_NS, body
    )
}

/// Test paragraph text, run underline and style references are captured
#[test]
fn test_parse_document_withRunsAndStyles_shouldBuildModel() {
    let xml = wrap_body(
        "<w:p>\
            <w:pPr><w:pStyle w:val=\"Speaker\"/></w:pPr>\
            <w:r><w:rPr><w:u w:val=\"single\"/></w:rPr><w:t>דני כהן:</w:t></w:r>\
         </w:p>\
         <w:p><w:r><w:t>שלום לכולם.</w:t></w:r></w:p>",
    );

    let paragraphs = parse_document_xml(&xml).unwrap();
    assert_eq!(paragraphs.len(), 2);

    assert_eq!(paragraphs[0].text, "דני כהן:");
    assert_eq!(paragraphs[0].style.as_deref(), Some("Speaker"));
    assert_eq!(paragraphs[0].runs.len(), 1);
    assert_eq!(paragraphs[0].runs[0].underline, Some(true));

    assert_eq!(paragraphs[1].text, "שלום לכולם.");
    assert_eq!(paragraphs[1].style, None);
    assert_eq!(paragraphs[1].runs[0].underline, None);
}

/// Test multiple runs concatenate into the paragraph text
#[test]
fn test_parse_document_withMultipleRuns_shouldConcatenateText() {
    let xml = wrap_body(
        "<w:p><w:r><w:t>שלום </w:t></w:r><w:r><w:t>לכולם</w:t></w:r></w:p>",
    );

    let paragraphs = parse_document_xml(&xml).unwrap();
    assert_eq!(paragraphs[0].text, "שלום לכולם");
    assert_eq!(paragraphs[0].runs.len(), 2);
}

/// Test run properties of the paragraph mark (inside w:pPr) are not a run
#[test]
fn test_parse_document_withParagraphMarkProps_shouldIgnoreThem() {
    let xml = wrap_body(
        "<w:p>\
            <w:pPr><w:rPr><w:u w:val=\"single\"/></w:rPr></w:pPr>\
            <w:r><w:t>טקסט</w:t></w:r>\
         </w:p>",
    );

    let paragraphs = parse_document_xml(&xml).unwrap();
    assert_eq!(paragraphs[0].runs.len(), 1);
    assert_eq!(paragraphs[0].runs[0].underline, None);
}

/// Test underline values other than single/true do not count
#[test]
fn test_parse_document_withNonSingleUnderline_shouldBeOff() {
    let xml = wrap_body(
        "<w:p><w:r><w:rPr><w:u w:val=\"none\"/></w:rPr><w:t>א</w:t></w:r></w:p>\
         <w:p><w:r><w:rPr><w:u w:val=\"double\"/></w:rPr><w:t>ב</w:t></w:r></w:p>\
         <w:p><w:r><w:rPr><w:u/></w:rPr><w:t>ג</w:t></w:r></w:p>",
    );

    let paragraphs = parse_document_xml(&xml).unwrap();
    assert_eq!(paragraphs[0].runs[0].underline, Some(false));
    assert_eq!(paragraphs[1].runs[0].underline, Some(false));
    assert_eq!(paragraphs[2].runs[0].underline, Some(true));
}

/// Test XML entities in run text are unescaped
#[test]
fn test_parse_document_withEscapedEntities_shouldUnescape() {
    let xml = wrap_body("<w:p><w:r><w:t>א &amp; ב</w:t></w:r></w:p>");
    let paragraphs = parse_document_xml(&xml).unwrap();
    assert_eq!(paragraphs[0].text, "א & ב");
}

/// Test style ids, base links and underline settings from styles.xml
#[test]
fn test_parse_styles_withBasedOnChain_shouldCaptureLinks() {
    let xml = format!(
        "<w:styles xmlns:w=\"{}\">\
            <w:style w:type=\"paragraph\" w:styleId=\"Speaker\">\
                <w:basedOn w:val=\"Normal\"/>\
            </w:style>\
            <w:style w:type=\"paragraph\" w:styleId=\"Normal\">\
                <w:rPr><w:u w:val=\"single\"/></w:rPr>\
            </w:style>\
         </w:styles>",
        DOCUMENT_NS
    );

    let styles = parse_styles_xml(&xml).unwrap();
    let speaker = styles.get("Speaker").unwrap();
    assert_eq!(speaker.based_on.as_deref(), Some("Normal"));
    assert_eq!(speaker.underline, None);

    let normal = styles.get("Normal").unwrap();
    assert_eq!(normal.underline, Some(true));
}

/// Test loading a full container from disk
#[test]
fn test_load_document_withGeneratedDocx_shouldReadParagraphs() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = common::create_test_docx(
        temp_dir.path(),
        "16_ptm_1.docx",
        &[("היו\"ר דני כהן:", true), ("שלום לכולם.", false)],
    )
    .unwrap();

    let document = load_document(&path).unwrap();
    assert_eq!(document.paragraphs.len(), 2);
    assert_eq!(document.paragraphs[0].text, "היו\"ר דני כהן:");
    assert_eq!(document.paragraphs[0].runs[0].underline, Some(true));
}

/// Test a non-docx file surfaces a document-level error
#[test]
fn test_load_document_withInvalidContainer_shouldFail() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("broken.docx");
    std::fs::write(&path, b"not a zip archive").unwrap();

    assert!(load_document(&path).is_err());
}
