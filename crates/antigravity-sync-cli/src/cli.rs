use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors (default)
    Warn,
    /// Informational messages
    Info,
    /// Debug messages (per-file progress)
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "ag-sync")]
#[command(about = "Generate Antigravity global workflows from opencode command markdown.")]
#[command(version)]
pub struct Cli {
    /// Directory containing opencode command .md files
    /// [default: ~/code/ai-configs/opencode/commands]
    #[arg(long, value_name = "PATH")]
    pub src: Option<String>,

    /// Destination directory for Antigravity global workflows
    /// [default: ~/.gemini/antigravity/global_workflows]
    #[arg(long, value_name = "PATH")]
    pub dst: Option<String>,

    /// Prefix for generated workflow filenames [default: oc-]
    #[arg(long)]
    pub prefix: Option<String>,

    /// Print what would be written without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Config file path (defaults to ~/.config/antigravity-sync/config.toml)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Set log level (off, error, warn, info, debug, trace)
    /// If not specified, uses RUST_LOG or defaults to 'warn'
    #[arg(short = 'l', long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Explicitly requested log level, if any
    pub fn requested_log_level(&self) -> Option<LevelFilter> {
        if self.verbose {
            Some(LevelFilter::DEBUG)
        } else {
            self.log_level.map(LevelFilter::from)
        }
    }
}
