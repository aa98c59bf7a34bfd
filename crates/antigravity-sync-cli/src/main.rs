use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use antigravity_sync_cli::{cli::Cli, commands, config::SyncConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for the report
    let env_filter = match cli.requested_log_level() {
        Some(level) => EnvFilter::new(format!(
            "antigravity_sync={},antigravity_sync_cli={}",
            level, level
        )),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    // Load configuration with CLI overrides
    let config = SyncConfig::load(cli.config, cli.src, cli.dst, cli.prefix)?;
    if let Ok(toml) = config.display_as_toml() {
        debug!("Effective configuration:\n{}", toml);
    }

    commands::sync::execute(&config, cli.dry_run)?;
    Ok(())
}
