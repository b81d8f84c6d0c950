use std::collections::HashSet;

use crate::document_model::{DocParagraph, StyleSheet, TextRun};

// @module: Underline inspection over runs and style chains

/// Checks if the paragraph text is underlined, considering direct run
/// formatting, character styles, and the paragraph style with its chain
/// of base styles.
pub fn is_paragraph_underlined(paragraph: &DocParagraph, styles: &StyleSheet) -> bool {
    // Any underlined run with visible text makes the paragraph underlined
    for run in &paragraph.runs {
        if !run.text.trim().is_empty() && is_run_underlined(run, styles) {
            return true;
        }
    }

    // Otherwise the paragraph style or one of its base styles may apply it
    if let Some(style_id) = &paragraph.style {
        if style_chain_underlined(style_id, styles) {
            return true;
        }
    }

    false
}

/// Returns true if the run is underlined, considering direct formatting and,
/// when direct formatting is absent, the run's character style.
pub fn is_run_underlined(run: &TextRun, styles: &StyleSheet) -> bool {
    match run.underline {
        Some(direct) => direct,
        None => match &run.style {
            Some(style_id) => style_chain_underlined(style_id, styles),
            None => false,
        },
    }
}

/// Walk a style and its base styles looking for an underline setting.
///
/// The container format does not guarantee the base-style chain is acyclic,
/// so the walk keeps a visited set and stops on the first repeat.
fn style_chain_underlined(style_id: &str, styles: &StyleSheet) -> bool {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut current = Some(style_id);

    while let Some(id) = current {
        if !visited.insert(id) {
            break;
        }
        match styles.get(id) {
            Some(def) => {
                if def.underline == Some(true) {
                    return true;
                }
                current = def.based_on.as_deref();
            }
            None => break,
        }
    }

    false
}
