//! Sync OpenCode commands into Antigravity global workflows

use std::fs;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::{debug, info, warn};

use crate::description::extract_description;
use crate::error::{SyncError, SyncResult};
use crate::sanitize::sanitize_workflow_stem;
use crate::types::{CommandSource, SyncOptions, SyncOutcome, SyncReport, README_FILE_NAME};
use crate::wrapper::Workflow;

/// Convert every command in `options.source_dir` into a workflow wrapper.
///
/// Existing workflows at the same destination path are overwritten. Any read
/// or write failure aborts the run.
pub fn sync_workflows(options: &SyncOptions) -> SyncResult<SyncReport> {
    let source_dir = &options.source_dir;
    if !source_dir.is_dir() {
        return Err(SyncError::MissingSourceDirectory {
            path: source_dir.clone(),
        });
    }

    if !options.dry_run {
        fs::create_dir_all(&options.dest_dir)
            .map_err(|e| SyncError::io(&options.dest_dir, e))?;
    }

    let sources = list_command_files(source_dir)?;
    if sources.is_empty() {
        info!("No command files in {}", source_dir.display());
        return Ok(SyncReport::new(options, SyncOutcome::NoSources));
    }

    let outcome = if options.dry_run {
        SyncOutcome::Previewed
    } else {
        SyncOutcome::Written
    };
    let mut report = SyncReport::new(options, outcome);

    for path in sources {
        if path.file_name().is_some_and(|n| n == README_FILE_NAME) {
            report.skipped += 1;
            continue;
        }

        let bytes = fs::read(&path).map_err(|e| SyncError::io(&path, e))?;
        let source = CommandSource::from_bytes(&path, &bytes);
        let (out_path, workflow) = plan_workflow(&source, &options.dest_dir, &options.prefix);

        if options.dry_run {
            debug!("Would write {} -> {}", path.display(), out_path.display());
            report.workflows.push(out_path);
            continue;
        }

        debug!("Writing {} -> {}", path.display(), out_path.display());
        fs::write(&out_path, workflow.render()).map_err(|e| SyncError::io(&out_path, e))?;
        report.written += 1;
        report.workflows.push(out_path);
    }

    info!(
        written = report.written,
        skipped = report.skipped,
        dry_run = options.dry_run,
        "Synced workflows into {}",
        options.dest_dir.display()
    );

    Ok(report)
}

/// Destination path and wrapper for one command
pub fn plan_workflow(source: &CommandSource, dest_dir: &Path, prefix: &str) -> (PathBuf, Workflow) {
    let description = extract_description(&source.body, &source.fallback_description());
    let out_stem = sanitize_workflow_stem(&source.stem, prefix);
    let out_path = dest_dir.join(format!("{out_stem}.md"));

    let workflow = Workflow::new(
        description,
        source.path.display().to_string(),
        source.stem.clone(),
    );

    (out_path, workflow)
}

/// Regular, non-hidden `*.md` files directly inside `dir`, sorted by path
pub fn list_command_files(dir: &Path) -> SyncResult<Vec<PathBuf>> {
    let pattern = format!("{}/*.md", Pattern::escape(&dir.to_string_lossy()));
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    let mut files = Vec::new();
    for entry in glob::glob_with(&pattern, options)? {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            SyncError::io(path, e.into_error())
        })?;

        if path.is_file() {
            files.push(path);
        } else {
            warn!("Skipping non-file entry {}", path.display());
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lists_only_top_level_markdown_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.md"), "b").unwrap();
        fs::write(temp.path().join("a.md"), "a").unwrap();
        fs::write(temp.path().join("notes.txt"), "x").unwrap();
        fs::write(temp.path().join(".hidden.md"), "x").unwrap();
        fs::create_dir(temp.path().join("dir.md")).unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested/c.md"), "c").unwrap();

        let files = list_command_files(temp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn directory_with_glob_characters_is_escaped() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("cmds [v1]");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("x.md"), "x").unwrap();

        let files = list_command_files(&dir).unwrap();
        assert_eq!(files, vec![dir.join("x.md")]);
    }

    #[test]
    fn plan_uses_sanitized_name_and_fallback() {
        let source = CommandSource::from_bytes(Path::new("/cmds/Git:Commit.md"), b"   \n");
        let (path, workflow) = plan_workflow(&source, Path::new("/dst"), "oc-");

        assert_eq!(path, PathBuf::from("/dst/oc-git-commit.md"));
        assert_eq!(workflow.stem, "Git:Commit");
        assert_eq!(
            workflow.description,
            "OpenCode command wrapper for Git:Commit.md"
        );
        assert_eq!(workflow.source_path, "/cmds/Git:Commit.md");
    }

    #[test]
    fn missing_source_is_fatal() {
        let temp = TempDir::new().unwrap();
        let options = SyncOptions::new(temp.path().join("nope"), temp.path().join("out"));

        let err = sync_workflows(&options).unwrap_err();
        assert!(matches!(err, SyncError::MissingSourceDirectory { .. }));
        assert!(err.to_string().starts_with("Missing source directory: "));
        assert!(!temp.path().join("out").exists());
    }

    #[test]
    fn source_that_is_a_file_is_fatal() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("cmds.md");
        fs::write(&file, "x").unwrap();

        let options = SyncOptions::new(&file, temp.path().join("out"));
        assert!(matches!(
            sync_workflows(&options),
            Err(SyncError::MissingSourceDirectory { .. })
        ));
    }
}
