// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use knesset_extract::app_config::{Config, LogLevel};
use knesset_extract::app_controller::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

fn level_filter(level: &LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract speaker-attributed sentences from protocol documents (default command)
    #[command(alias = "extract")]
    Extract(ExtractArgs),

    /// Generate shell completions for knesset-extract
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ExtractArgs {
    /// Directory containing the input .docx protocol files
    #[arg(value_name = "INPUT_DIR")]
    input_dir: PathBuf,

    /// Path of the output JSONL file
    #[arg(value_name = "OUTPUT_FILE")]
    output_file: PathBuf,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// knesset-extract - Knesset protocol sentence extraction
///
/// Extracts speaker-attributed, tokenized Hebrew sentences from Knesset
/// protocol transcripts (.docx) into line-delimited JSON records.
#[derive(Parser, Debug)]
#[command(name = "knesset-extract")]
#[command(version = "0.1.0")]
#[command(about = "Knesset protocol sentence extraction tool")]
#[command(long_about = "knesset-extract reads Knesset protocol .docx documents, detects speaker
announcement lines, and writes one JSON record per extracted sentence.

EXAMPLES:
    knesset-extract protocols/ corpus.jsonl          # Process a folder of protocols
    knesset-extract -l debug protocols/ corpus.jsonl # Process with debug logging
    knesset-extract completions bash                 # Generate bash completions

CONFIGURATION:
    The speaker-name heuristic tables (titles, ministry stop-words, the
    definite-article exception list, interjection labels) are read from
    conf.json when present; built-in defaults are used otherwise.

FILE NAMES:
    Input files follow <knesset>_<type>_<id>.docx, where type 'ptm' is a
    plenary session and 'ptv' a committee session.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory containing the input .docx protocol files
    #[arg(value_name = "INPUT_DIR")]
    input_dir: Option<PathBuf>,

    /// Path of the output JSONL file
    #[arg(value_name = "OUTPUT_FILE")]
    output_file: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let emoji = Self::get_emoji_for_level(record.level());

            let color = match record.level() {
                Level::Error => "\x1B[1;31m",
                Level::Warn => "\x1B[1;33m",
                Level::Info => "\x1B[1;32m",
                Level::Debug => "\x1B[1;36m",
                Level::Trace => "\x1B[1;35m",
            };

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "knesset-extract", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Extract(args)) => run_extract(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_dir = cli
                .input_dir
                .ok_or_else(|| anyhow!("INPUT_DIR is required when no subcommand is specified"))?;
            let output_file = cli
                .output_file
                .ok_or_else(|| anyhow!("OUTPUT_FILE is required when no subcommand is specified"))?;

            run_extract(ExtractArgs {
                input_dir,
                output_file,
                config_path: cli.config_path,
                log_level: cli.log_level,
            })
        }
    }
}

fn run_extract(args: ExtractArgs) -> Result<()> {
    let mut config = Config::load_or_default(&args.config_path)?;

    // CLI log level takes precedence over the config file
    if let Some(cli_level) = args.log_level {
        config.log_level = cli_level.into();
    }
    log::set_max_level(level_filter(&config.log_level));

    let controller = Controller::with_config(config)?;
    controller.run_folder(args.input_dir, args.output_file)
}
