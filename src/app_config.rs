use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

/// Application configuration module
/// This module handles the application configuration, including the
/// heuristic lookup tables the name normalizer and the aggregator rely on.
/// The tables are configuration rather than control flow so they can be
/// extended without touching the state machine.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Minimum token count for a sentence to be kept
    #[serde(default = "default_min_sentence_tokens")]
    pub min_sentence_tokens: usize,

    /// Speaker-name boundary heuristics
    #[serde(default)]
    pub name_rules: NameRules,
}

/// Lookup tables for speaker-name boundary detection.
///
/// Hebrew titles, ministry names and the definite article can sit next to a
/// name with no punctuation boundary, so the boundary is detected by word
/// class rather than by pattern alone.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NameRules {
    /// Ministry/portfolio fragments that end a name when walking backwards
    #[serde(default = "default_stop_words")]
    pub stop_words: HashSet<String>,

    /// Titles and honorifics that end a name
    #[serde(default = "default_title_prefixes")]
    pub title_prefixes: HashSet<String>,

    /// Legitimate given names starting with the definite-article letter
    #[serde(default = "default_given_name_exceptions")]
    pub given_name_exceptions: HashSet<String>,

    /// Pseudo-speaker labels whose speech is excluded from output
    #[serde(default = "default_interjection_labels")]
    pub interjection_labels: HashSet<String>,

    /// Hard cap on the number of words in a name
    #[serde(default = "default_max_name_words")]
    pub max_name_words: usize,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_min_sentence_tokens() -> usize {
    4
}

fn default_max_name_words() -> usize {
    5
}

fn default_stop_words() -> HashSet<String> {
    [
        "במשרד", "בממשלה", "ביטחון", "בראש", "לביטחון", "למשטרה", "לחקלאות", "פנים",
        "לתעשייה", "והמסחר", "לסביבה", "לאוצר", "לתחבורה", "לתקשורת", "מודיעין",
        "בדרכים", "לתשתיות", "ללאומיות", "לעלייה", "ולקליטה", "לענייני", "כלכלה",
        "וחברה", "למנכ\"לית", "למנכ\"ל",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_title_prefixes() -> HashSet<String> {
    [
        "ד\"ר", "פרופ'", "עו\"ד", "רב", "ניצב", "היו\"ר", "נצ\"מ", "סא\"ל", "רס\"ן",
        "תא\"ל", "אלוף", "מר", "גב'", "גב\"'", "שר", "שרת",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_given_name_exceptions() -> HashSet<String> {
    [
        "האנה", "האני", "הארי", "הגר", "הדס", "הדסה", "הדר", "הדרה", "הוגו", "הוד",
        "הודיה", "הולי", "הורדוס", "היידי", "היילי", "הילאי", "הילדה", "הילה",
        "הילור", "הילי", "הילית", "הילל", "הילרי", "הינדל", "הלגה", "הלל", "הללי",
        "הלן", "הלנה", "הלני", "הני", "הניה", "הנרי", "הנריטה", "הנרייטה", "הענדל",
        "העני", "הקטור", "הראל", "הראלה", "הרברט", "הרולד", "הרמיוני", "הרן",
        "הרצל", "הרשל",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_interjection_labels() -> HashSet<String> {
    ["קריאה", "קריאות"].iter().map(|s| s.to_string()).collect()
}

impl Default for NameRules {
    fn default() -> Self {
        NameRules {
            stop_words: default_stop_words(),
            title_prefixes: default_title_prefixes(),
            given_name_exceptions: default_given_name_exceptions(),
            interjection_labels: default_interjection_labels(),
            max_name_words: default_max_name_words(),
        }
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: LogLevel::default(),
            min_sentence_tokens: default_min_sentence_tokens(),
            name_rules: NameRules::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration from a JSON file, falling back to defaults when
    /// the file does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            warn!(
                "Config file {} not found, using default configuration",
                path.display()
            );
            Ok(Config::default())
        }
    }
}
