//! Path expansion for user-supplied directories

use std::path::{Component, Path, PathBuf};

use crate::error::{SyncError, SyncResult};

/// Expand a leading `~`, then make the path absolute.
///
/// Only the home directory is expanded; `$` and other shell syntax are kept
/// literally. Symlinks are resolved through the longest existing ancestor,
/// so a destination that does not exist yet still lands under its real
/// parent directory.
pub fn resolve_path(raw: &str) -> SyncResult<PathBuf> {
    let path = PathBuf::from(shellexpand::tilde(raw).as_ref());

    let absolute = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()
            .map_err(|e| SyncError::io(".", e))?
            .join(path)
    };

    Ok(canonicalize_existing_prefix(&absolute))
}

/// Canonicalize the deepest ancestor that exists and re-append the rest
fn canonicalize_existing_prefix(path: &Path) -> PathBuf {
    for ancestor in path.ancestors() {
        let Ok(canonical) = ancestor.canonicalize() else {
            continue;
        };
        if let Ok(rest) = path.strip_prefix(ancestor) {
            return normalize_lexically(&canonical.join(rest));
        }
    }
    normalize_lexically(path)
}

/// Drop `.` components and fold `..` into its parent without touching disk
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
