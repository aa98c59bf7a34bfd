use anyhow::{Context, Result};
use antigravity_sync::{resolve_path, SyncOptions, DEFAULT_PREFIX};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Source directory override
pub const ENV_SOURCE: &str = "AG_SYNC_SRC";
/// Destination directory override
pub const ENV_DESTINATION: &str = "AG_SYNC_DST";
/// Filename prefix override
pub const ENV_PREFIX: &str = "AG_SYNC_PREFIX";
/// When set, the user's config file is not read
pub const ENV_TEST_MODE: &str = "AG_SYNC_TEST_MODE";

/// Sync configuration
///
/// Paths are kept unexpanded (`~/...`) until [`SyncConfig::to_options`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Directory containing OpenCode command files
    pub source: String,

    /// Antigravity global workflows directory
    pub destination: String,

    /// Prefix for generated workflow filenames
    pub prefix: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            destination: default_destination(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

fn default_source() -> String {
    "~/code/ai-configs/opencode/commands".to_string()
}

fn default_destination() -> String {
    "~/.gemini/antigravity/global_workflows".to_string()
}

impl SyncConfig {
    /// Load configuration with precedence: defaults < file < env < args
    pub fn load(
        config_file: Option<PathBuf>,
        source: Option<String>,
        destination: Option<String>,
        prefix: Option<String>,
    ) -> Result<Self> {
        let mut config = Self::from_file_or_default(config_file)?;

        // Override with env vars
        if let Ok(path) = std::env::var(ENV_SOURCE) {
            config.source = path;
        }
        if let Ok(path) = std::env::var(ENV_DESTINATION) {
            config.destination = path;
        }
        if let Ok(prefix) = std::env::var(ENV_PREFIX) {
            config.prefix = prefix;
        }

        // Override with CLI args (highest priority)
        if let Some(path) = source {
            config.source = path;
        }
        if let Some(path) = destination {
            config.destination = path;
        }
        if let Some(prefix) = prefix {
            config.prefix = prefix;
        }

        Ok(config)
    }

    /// Get default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("antigravity-sync");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file or return default
    fn from_file_or_default(config_file: Option<PathBuf>) -> Result<Self> {
        let path = match config_file {
            Some(path) => Some(path),
            // Tests must not pick up the user's real config
            None if std::env::var(ENV_TEST_MODE).is_ok() => None,
            None => Self::default_config_path().ok(),
        };

        match path.filter(|p| p.exists()) {
            Some(path) => {
                let contents = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;
                toml::from_str(&contents)
                    .with_context(|| format!("Failed to parse config file: {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Resolve both directories and build the options for a run
    pub fn to_options(&self, dry_run: bool) -> Result<SyncOptions> {
        let source_dir = resolve_path(&self.source)
            .with_context(|| format!("Failed to resolve source path: {}", self.source))?;
        let dest_dir = resolve_path(&self.destination)
            .with_context(|| format!("Failed to resolve destination path: {}", self.destination))?;

        Ok(SyncOptions::new(source_dir, dest_dir)
            .with_prefix(self.prefix.clone())
            .with_dry_run(dry_run))
    }

    /// Display the effective configuration as TOML
    pub fn display_as_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config as TOML")
    }
}
