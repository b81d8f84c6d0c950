use std::path::{Path, PathBuf};

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};

use crate::aggregator::ProtocolAssembler;
use crate::app_config::Config;
use crate::docx_reader;
use crate::file_utils::{self, FileManager};
use crate::protocol::Protocol;

// @module: Application controller for protocol extraction

/// Main application controller for batch protocol extraction
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Process every .docx protocol in a folder and write one JSONL file.
    ///
    /// A failure in one document is logged and does not abort the batch;
    /// the failed document simply contributes zero sentences.
    pub fn run_folder(&self, input_dir: PathBuf, output_file: PathBuf) -> Result<()> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        if !FileManager::dir_exists(&input_dir) {
            return Err(anyhow::anyhow!(
                "Input directory does not exist: {:?}",
                input_dir
            ));
        }

        let protocol_files = FileManager::find_files(&input_dir, "docx")?;
        if protocol_files.is_empty() {
            return Err(anyhow::anyhow!(
                "No .docx files found in directory: {:?}",
                input_dir
            ));
        }

        // Progress bar over the document list
        let progress = ProgressBar::new(protocol_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress.set_style(template_result.progress_chars("█▓▒░"));
        progress.set_message("Processing protocols");

        // Track success and failure counts
        let mut success_count = 0;
        let mut error_count = 0;
        let mut protocols: Vec<Protocol> = Vec::new();

        for protocol_file in &protocol_files {
            let file_name = protocol_file
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());

            progress.set_message(format!("Processing: {}", file_name));

            match self.process_file(protocol_file) {
                Ok(protocol) => {
                    success_count += 1;
                    protocols.push(protocol);
                }
                Err(e) => {
                    error!("Error processing file {}: {}", file_name, e);
                    error_count += 1;
                }
            }

            progress.inc(1);
        }

        progress.finish_with_message("Folder processing complete");

        FileManager::write_jsonl(&output_file, &protocols)?;

        let duration = start_time.elapsed();
        let sentence_count: usize = protocols.iter().map(|p| p.sentences.len()).sum();

        // Give summary results - important for batch operations
        info!(
            "Folder processing completed in {:.1}s: {} processed, {} errors, {} sentences written to {:?}",
            duration.as_secs_f64(),
            success_count,
            error_count,
            sentence_count,
            output_file
        );

        Ok(())
    }

    /// Process one protocol document into its extracted Protocol value
    pub fn process_file(&self, path: &Path) -> Result<Protocol> {
        let file_name = path
            .file_name()
            .map(|f| f.to_string_lossy().to_string())
            .unwrap_or_default();

        let (knesset_number, protocol_type) = file_utils::parse_protocol_file_name(&file_name)?;
        let document = docx_reader::load_document(path)?;

        let assembler = ProtocolAssembler::new(&self.config);
        let protocol = assembler.assemble(&document, &file_name, knesset_number, protocol_type);

        info!(
            "Extracted {} sentences from {} (protocol number {})",
            protocol.sentences.len(),
            file_name,
            protocol.protocol_number
        );

        Ok(protocol)
    }
}
