/*!
 * # knesset-extract
 *
 * A Rust library for extracting speaker-attributed sentences from Knesset
 * protocol documents (.docx transcripts).
 *
 * ## Features
 *
 * - Read protocol paragraphs, runs and styles from .docx containers
 * - Detect speaker announcement lines (underline formatting + text pattern)
 * - Normalize speaker names (titles, ministry fragments, definite article)
 * - Extract the protocol number, including Hebrew number-word headings
 * - Segment, validate and tokenize speech into clean Hebrew sentences
 * - Batch processing of protocol folders into JSONL records
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management and heuristic lookup tables
 * - `document_model`: Read-only paragraph/run/style document model
 * - `docx_reader`: .docx container loading into the document model
 * - `formatting`: Underline inspection over runs and style chains
 * - `hebrew_numerals`: Number-word to integer conversion
 * - `metadata`: Protocol-number extraction from document headings
 * - `classifier`: Speaker-line classification of paragraphs
 * - `speaker_name`: Speaker name normalization
 * - `sentence`: Sentence segmentation, validation and tokenization
 * - `aggregator`: Speech aggregation state machine and protocol assembly
 * - `protocol`: Output data model and JSONL record projection
 * - `file_utils`: File discovery, file-name parsing and JSONL output
 * - `app_controller`: Folder batch driver
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod aggregator;
pub mod app_config;
pub mod app_controller;
pub mod classifier;
pub mod document_model;
pub mod docx_reader;
pub mod errors;
pub mod file_utils;
pub mod formatting;
pub mod hebrew_numerals;
pub mod metadata;
pub mod protocol;
pub mod sentence;
pub mod speaker_name;

// Re-export main types for easier usage
pub use app_config::Config;
pub use aggregator::ProtocolAssembler;
pub use document_model::{DocParagraph, StyleSheet, TextRun, TranscriptDocument};
pub use errors::{AppError, DocumentError};
pub use protocol::{Protocol, ProtocolType, Sentence};
