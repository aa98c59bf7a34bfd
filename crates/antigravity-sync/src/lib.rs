//! # antigravity-sync
//!
//! Generate Antigravity global workflows from OpenCode command markdown.
//!
//! Each `*.md` command becomes an `oc-<sanitized-stem>.md` workflow whose
//! frontmatter carries the command's description and whose body tells the
//! agent to read and follow the source command. The transforms
//! ([`sanitize_workflow_stem`], [`extract_description`],
//! [`build_wrapper_workflow`]) are pure; [`sync_workflows`] does the I/O.

pub mod description;
mod error;
pub mod paths;
pub mod sanitize;
pub mod sync;
pub mod types;
pub mod wrapper;

pub use description::extract_description;
pub use error::{SyncError, SyncResult};
pub use paths::resolve_path;
pub use sanitize::sanitize_workflow_stem;
pub use sync::{list_command_files, plan_workflow, sync_workflows};
pub use types::{CommandSource, SyncOptions, SyncOutcome, SyncReport, DEFAULT_PREFIX};
pub use wrapper::{build_wrapper_workflow, Workflow};
