use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::errors::DocumentError;
use crate::protocol::{Protocol, ProtocolType};

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    /// Find files with a specific extension in a directory (recursive)
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let normalized_ext = extension.trim_start_matches('.');

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(normalized_ext) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        // Deterministic processing order regardless of directory iteration
        result.sort();
        Ok(result)
    }

    /// Write one JSON object per sentence of every protocol, in order
    pub fn write_jsonl<P: AsRef<Path>>(path: P, protocols: &[Protocol]) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);

        for protocol in protocols {
            for record in protocol.records() {
                let line = serde_json::to_string(&record)
                    .context("Failed to serialize sentence record")?;
                writeln!(writer, "{}", line)?;
            }
        }

        writer.flush()?;
        Ok(())
    }
}

/// Parses a protocol file name into the Knesset number and protocol type.
///
/// The convention is `<knesset>_<type>_<id>.docx` where type code "ptm" is a
/// plenary session and "ptv" a committee session; any other code maps to
/// Unknown.
pub fn parse_protocol_file_name(file_name: &str) -> Result<(u32, ProtocolType), DocumentError> {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut parts = stem.split('_');
    let knesset_part = parts
        .next()
        .ok_or_else(|| DocumentError::FileName(file_name.to_string()))?;
    let type_part = parts
        .next()
        .ok_or_else(|| DocumentError::FileName(file_name.to_string()))?;

    let knesset_number: u32 = knesset_part
        .parse()
        .map_err(|_| DocumentError::FileName(file_name.to_string()))?;

    let protocol_type = match type_part {
        "ptm" => ProtocolType::Plenary,
        "ptv" => ProtocolType::Committee,
        _ => ProtocolType::Unknown,
    };

    Ok((knesset_number, protocol_type))
}
