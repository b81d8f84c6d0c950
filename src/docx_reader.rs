use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::ZipArchive;

use crate::document_model::{DocParagraph, StyleDef, StyleSheet, TextRun, TranscriptDocument};
use crate::errors::DocumentError;

// @module: .docx container loading into the document model

/// Load a .docx file into the read-only document model.
///
/// Reads word/document.xml for the paragraph/run sequence and
/// word/styles.xml for the style sheet; a missing styles part yields an
/// empty style sheet, not an error.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<TranscriptDocument, DocumentError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut archive =
        ZipArchive::new(file).map_err(|e| DocumentError::Container(e.to_string()))?;

    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| DocumentError::Container(format!("missing word/document.xml: {}", e)))?
        .read_to_string(&mut document_xml)?;

    let styles = match archive.by_name("word/styles.xml") {
        Ok(mut styles_file) => {
            let mut styles_xml = String::new();
            styles_file.read_to_string(&mut styles_xml)?;
            parse_styles_xml(&styles_xml)?
        }
        Err(_) => StyleSheet::new(),
    };

    let paragraphs = parse_document_xml(&document_xml)?;
    debug!(
        "Loaded {}: {} paragraphs, styles: {}",
        path.display(),
        paragraphs.len(),
        !styles.is_empty()
    );

    Ok(TranscriptDocument::new(paragraphs, styles))
}

/// Parse word/document.xml into ordered paragraphs with their runs.
///
/// Run properties found inside w:pPr belong to the paragraph mark, not to a
/// text run, and are skipped.
pub fn parse_document_xml(xml: &str) -> Result<Vec<DocParagraph>, DocumentError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut paragraphs: Vec<DocParagraph> = Vec::new();
    let mut buf = Vec::new();

    let mut in_paragraph = false;
    let mut in_p_pr = false;
    let mut in_run = false;
    let mut in_text = false;

    let mut para_style: Option<String> = None;
    let mut runs: Vec<TextRun> = Vec::new();
    let mut run_text = String::new();
    let mut run_underline: Option<bool> = None;
    let mut run_style: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => {
                    in_paragraph = true;
                    para_style = None;
                    runs.clear();
                }
                b"w:pPr" if in_paragraph => {
                    in_p_pr = true;
                }
                b"w:pStyle" if in_p_pr => {
                    para_style = get_attr(&e, b"w:val");
                }
                b"w:r" if in_paragraph && !in_p_pr => {
                    in_run = true;
                    run_text.clear();
                    run_underline = None;
                    run_style = None;
                }
                b"w:rStyle" if in_run => {
                    run_style = get_attr(&e, b"w:val");
                }
                b"w:u" if in_run => {
                    run_underline = underline_from_val(&e);
                }
                b"w:t" if in_run => {
                    in_text = true;
                }
                b"w:tab" if in_run => {
                    run_text.push('\t');
                }
                b"w:br" if in_run => {
                    run_text.push('\n');
                }
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:p" => {
                    paragraphs.push(DocParagraph::default());
                }
                b"w:pStyle" if in_p_pr => {
                    para_style = get_attr(&e, b"w:val");
                }
                b"w:rStyle" if in_run => {
                    run_style = get_attr(&e, b"w:val");
                }
                b"w:u" if in_run => {
                    run_underline = underline_from_val(&e);
                }
                b"w:tab" if in_run => {
                    run_text.push('\t');
                }
                b"w:br" if in_run => {
                    run_text.push('\n');
                }
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:p" => {
                    if in_paragraph {
                        paragraphs.push(DocParagraph::from_runs(
                            std::mem::take(&mut runs),
                            para_style.as_deref(),
                        ));
                    }
                    in_paragraph = false;
                }
                b"w:pPr" => {
                    in_p_pr = false;
                }
                b"w:r" => {
                    if in_run {
                        runs.push(TextRun {
                            text: std::mem::take(&mut run_text),
                            underline: run_underline,
                            style: run_style.take(),
                        });
                    }
                    in_run = false;
                }
                b"w:t" => {
                    in_text = false;
                }
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text {
                    let text = e
                        .unescape()
                        .map_err(|err| DocumentError::Xml(err.to_string()))?;
                    run_text.push_str(&text);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(DocumentError::Xml(e.to_string())),
        }
        buf.clear();
    }

    Ok(paragraphs)
}

/// Parse word/styles.xml into the style sheet, keeping per style only the
/// underline setting and the base-style link.
pub fn parse_styles_xml(xml: &str) -> Result<StyleSheet, DocumentError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut styles = StyleSheet::new();
    let mut buf = Vec::new();

    let mut in_style = false;
    let mut current_id = String::new();
    let mut current_def = StyleDef::default();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:style" => {
                    in_style = true;
                    current_id = get_attr(&e, b"w:styleId").unwrap_or_default();
                    current_def = StyleDef::default();
                }
                b"w:basedOn" if in_style => {
                    current_def.based_on = get_attr(&e, b"w:val");
                }
                b"w:u" if in_style => {
                    current_def.underline = underline_from_val(&e);
                }
                _ => {}
            },
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"w:style" {
                    if !current_id.is_empty() {
                        styles.insert(&current_id, current_def.clone());
                    }
                    in_style = false;
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(DocumentError::Xml(e.to_string())),
        }
        buf.clear();
    }

    Ok(styles)
}

// Attribute lookup by qualified name
fn get_attr(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == key)
        .map(|a| String::from_utf8_lossy(&a.value).into_owned())
}

/// Map a w:u value to an underline state: only single/true count as
/// underlined, anything else (none, dotted, double, ...) does not.
fn underline_from_val(e: &BytesStart) -> Option<bool> {
    match get_attr(e, b"w:val") {
        None => Some(true),
        Some(val) => match val.as_str() {
            "single" | "true" | "1" => Some(true),
            _ => Some(false),
        },
    }
}
