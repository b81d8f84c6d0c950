/*!
 * Error types for the knesset-extract application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while reading a protocol document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Error reading the file from disk
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error opening or reading the .docx container
    #[error("Invalid document container: {0}")]
    Container(String),

    /// Error parsing the document XML
    #[error("Failed to parse document XML: {0}")]
    Xml(String),

    /// File name does not follow the <knesset>_<type>_<id> convention
    #[error("Unrecognized protocol file name: {0}")]
    FileName(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from reading or parsing a document
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
