//! Sync command: write (or preview) Antigravity workflows

use anyhow::Result;
use antigravity_sync::{sync_workflows, SyncReport};
use tracing::debug;

use crate::config::SyncConfig;

/// Execute a sync run and print its report to stdout
pub fn execute(config: &SyncConfig, dry_run: bool) -> Result<SyncReport> {
    let options = config.to_options(dry_run)?;
    debug!(
        "Syncing {} -> {} (prefix {:?}, dry run: {})",
        options.source_dir.display(),
        options.dest_dir.display(),
        options.prefix,
        options.dry_run
    );

    let report = sync_workflows(&options)?;
    print_report(&report);
    Ok(report)
}

fn print_report(report: &SyncReport) {
    let rendered = report.to_string();
    if !rendered.is_empty() {
        println!("{rendered}");
    }
}
