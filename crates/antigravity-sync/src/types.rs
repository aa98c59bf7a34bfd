//! Core types for antigravity-sync

use std::fmt;
use std::path::{Path, PathBuf};

/// Default filename prefix for generated workflows
pub const DEFAULT_PREFIX: &str = "oc-";

/// Source file name that is never converted
pub const README_FILE_NAME: &str = "README.md";

/// Inputs for a single sync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// Directory holding OpenCode command `*.md` files
    pub source_dir: PathBuf,
    /// Antigravity global workflows directory
    pub dest_dir: PathBuf,
    /// Prepended to every generated file stem
    pub prefix: String,
    /// Report destination paths without writing anything
    pub dry_run: bool,
}

impl SyncOptions {
    pub fn new(source_dir: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            dest_dir: dest_dir.into(),
            prefix: DEFAULT_PREFIX.to_string(),
            dry_run: false,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// An OpenCode command file, read once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSource {
    pub path: PathBuf,
    /// File name including extension (e.g. `review-pr.md`)
    pub file_name: String,
    /// File name without extension (e.g. `review-pr`)
    pub stem: String,
    /// Lossily decoded text
    pub body: String,
}

impl CommandSource {
    /// Build from a path and raw bytes; invalid UTF-8 is replaced, never rejected
    pub fn from_bytes(path: &Path, bytes: &[u8]) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            path: path.to_path_buf(),
            file_name,
            stem,
            body: String::from_utf8_lossy(bytes).into_owned(),
        }
    }

    /// Description used when the file has no usable text
    pub fn fallback_description(&self) -> String {
        format!("OpenCode command wrapper for {}", self.file_name)
    }
}

/// How a sync run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The source directory had no `*.md` files
    NoSources,
    /// Paths were computed but nothing was written
    Previewed,
    /// Workflows were written to the destination
    Written,
}

/// Result of a sync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub outcome: SyncOutcome,
    /// Destination path per converted source, in source order
    pub workflows: Vec<PathBuf>,
    /// Files skipped by name (README.md)
    pub skipped: usize,
    /// Files actually written (always 0 for previews)
    pub written: usize,
}

impl SyncReport {
    pub(crate) fn new(options: &SyncOptions, outcome: SyncOutcome) -> Self {
        Self {
            source_dir: options.source_dir.clone(),
            dest_dir: options.dest_dir.clone(),
            outcome,
            workflows: Vec::new(),
            skipped: 0,
            written: 0,
        }
    }

    /// Glob the source directory was searched with, for display
    pub fn source_pattern(&self) -> String {
        format!("{}/*.md", self.source_dir.display())
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            SyncOutcome::NoSources => {
                write!(f, "No source files found at: {}", self.source_pattern())
            }
            // One path per line; empty when every file was skipped
            SyncOutcome::Previewed => {
                for (i, path) in self.workflows.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", path.display())?;
                }
                Ok(())
            }
            SyncOutcome::Written => write!(
                f,
                "Wrote {} workflow(s) to: {}",
                self.written,
                self.dest_dir.display()
            ),
        }
    }
}
