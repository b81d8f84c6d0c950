use std::fmt;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

// @module: Output data model for extracted protocols

/// Kind of Knesset session a protocol records
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolType {
    /// Plenary session (file code "ptm")
    Plenary,
    /// Committee session (file code "ptv")
    Committee,
    /// Anything else
    #[default]
    Unknown,
}

impl ProtocolType {
    // @returns: Lowercase type identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Plenary => "plenary".to_string(),
            Self::Committee => "committee".to_string(),
            Self::Unknown => "unknown".to_string(),
        }
    }
}

impl fmt::Display for ProtocolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for ProtocolType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "plenary" => Ok(Self::Plenary),
            "committee" => Ok(Self::Committee),
            "unknown" => Ok(Self::Unknown),
            _ => Err(anyhow!("Invalid protocol type: {}", s)),
        }
    }
}

/// One speaker-attributed, tokenized sentence.
///
/// Immutable after creation; the speaker name and the token-joined text are
/// both guaranteed non-empty by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// Normalized speaker name
    pub speaker_name: String,

    /// Tokenized sentence text, tokens joined with single spaces
    pub sentence_text: String,
}

impl Sentence {
    pub fn new(speaker_name: String, sentence_text: String) -> Self {
        Sentence {
            speaker_name,
            sentence_text,
        }
    }
}

/// One protocol document with its extracted sentences
#[derive(Debug, Serialize)]
pub struct Protocol {
    /// Source file name
    pub protocol_name: String,

    /// Knesset (assembly) number from the file name
    pub knesset_number: u32,

    /// Session category from the file name
    pub protocol_type: ProtocolType,

    /// Protocol number from the document heading, -1 when not found
    pub protocol_number: i64,

    /// Extracted sentences in document order
    pub sentences: Vec<Sentence>,
}

impl Protocol {
    /// Create an empty protocol; sentences are appended by the assembler
    pub fn new(
        protocol_name: String,
        knesset_number: u32,
        protocol_type: ProtocolType,
        protocol_number: i64,
    ) -> Self {
        Protocol {
            protocol_name,
            knesset_number,
            protocol_type,
            protocol_number,
            sentences: Vec::new(),
        }
    }

    /// Flatten this protocol into one serializable record per sentence
    pub fn records(&self) -> impl Iterator<Item = SentenceRecord<'_>> {
        self.sentences.iter().map(move |sentence| SentenceRecord {
            protocol_name: &self.protocol_name,
            knesset_number: self.knesset_number,
            protocol_type: self.protocol_type,
            protocol_number: self.protocol_number,
            speaker_name: &sentence.speaker_name,
            sentence_text: &sentence.sentence_text,
        })
    }
}

/// One line of the JSONL output: protocol metadata plus a single sentence
#[derive(Debug, Serialize)]
pub struct SentenceRecord<'a> {
    pub protocol_name: &'a str,
    pub knesset_number: u32,
    pub protocol_type: ProtocolType,
    pub protocol_number: i64,
    pub speaker_name: &'a str,
    pub sentence_text: &'a str,
}
