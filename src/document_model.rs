use std::collections::HashMap;

// @module: Read-only document model consumed by the extraction pipeline

/// One formatting run inside a paragraph
#[derive(Debug, Clone, Default)]
pub struct TextRun {
    /// Run text
    pub text: String,

    /// Direct underline formatting: Some(true) single/true underline,
    /// Some(false) explicitly off, None when the run carries no w:u
    pub underline: Option<bool>,

    /// Optional character style id
    pub style: Option<String>,
}

impl TextRun {
    pub fn new(text: &str, underline: Option<bool>, style: Option<&str>) -> Self {
        TextRun {
            text: text.to_string(),
            underline,
            style: style.map(|s| s.to_string()),
        }
    }
}

/// One document paragraph: concatenated text plus its formatting runs
#[derive(Debug, Clone, Default)]
pub struct DocParagraph {
    /// Full paragraph text (run texts in order)
    pub text: String,

    /// Formatting runs in order
    pub runs: Vec<TextRun>,

    /// Optional paragraph style id
    pub style: Option<String>,
}

impl DocParagraph {
    /// Build a paragraph from runs; the paragraph text is the run texts joined
    pub fn from_runs(runs: Vec<TextRun>, style: Option<&str>) -> Self {
        let text = runs.iter().map(|r| r.text.as_str()).collect::<String>();
        DocParagraph {
            text,
            runs,
            style: style.map(|s| s.to_string()),
        }
    }

    /// Plain paragraph with a single run and no formatting
    pub fn plain(text: &str) -> Self {
        DocParagraph::from_runs(vec![TextRun::new(text, None, None)], None)
    }
}

/// One style definition from the document style sheet
#[derive(Debug, Clone, Default)]
pub struct StyleDef {
    /// Underline specified by the style's run properties
    pub underline: Option<bool>,

    /// Parent style id (w:basedOn)
    pub based_on: Option<String>,
}

/// Document style sheet: style id to definition.
///
/// Character and paragraph styles share one id namespace, as in the
/// container format. The base-style chain is not guaranteed acyclic.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    styles: HashMap<String, StyleDef>,
}

impl StyleSheet {
    pub fn new() -> Self {
        StyleSheet {
            styles: HashMap::new(),
        }
    }

    pub fn insert(&mut self, id: &str, def: StyleDef) {
        self.styles.insert(id.to_string(), def);
    }

    pub fn get(&self, id: &str) -> Option<&StyleDef> {
        self.styles.get(id)
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// One loaded transcript document: ordered paragraphs plus the style sheet
#[derive(Debug, Default)]
pub struct TranscriptDocument {
    pub paragraphs: Vec<DocParagraph>,
    pub styles: StyleSheet,
}

impl TranscriptDocument {
    pub fn new(paragraphs: Vec<DocParagraph>, styles: StyleSheet) -> Self {
        TranscriptDocument { paragraphs, styles }
    }
}
